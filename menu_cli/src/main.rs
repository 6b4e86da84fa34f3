mod config;

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use menu_catalog::load_catalog;
use menu_core::{
    engine::Engine,
    event::InputEvent,
    model::{DishId, MenuView},
    session::Session,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{apply_args, load_settings};

/// 终端点菜：搜索、按分类筛选、查看菜品详情。
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// 菜品目录（.tsv 或 .toml）
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// 日志过滤器（例如 `debug`、`menu_core=debug`）
    #[arg(long)]
    log: Option<String>,
    /// 配置文件（默认尝试 ./menu.toml）
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    apply_args(&mut settings, args.catalog, args.log);

    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let catalog_path = settings.catalog_path.unwrap_or_else(default_catalog_path);
    let catalog = load_catalog(&catalog_path)
        .with_context(|| format!("failed to load catalog '{}'", catalog_path.display()))?;
    info!(dishes = catalog.len(), "starting session");

    let mut session = Session::new(Engine::new(catalog));
    let stdin = io::stdin();
    repl(&mut session, &catalog_path, &mut stdin.lock(), &mut io::stdout())
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("menu.tsv")
}

/// 一行输入对应一个命令；`Event` 恰好触发一次状态转移。
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(InputEvent),
    Render,
    Help,
}

/// 搜索词只去掉行尾换行，其余原样保留（包括空格）。
fn parse_command(line: &str, categories: &[String]) -> Result<Command, String> {
    let raw = strip_newline(line);
    let trimmed = raw.trim();
    if trimmed == "/" {
        return Ok(Command::Event(InputEvent::Search(String::new())));
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Ok(Command::Event(InputEvent::Search(raw.to_string())));
    };
    let (cmd, arg) = match rest.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (rest, ""),
    };
    match cmd {
        "q" | "quit" | "exit" => Ok(Command::Event(InputEvent::Exit)),
        "h" | "help" => Ok(Command::Help),
        "l" | "list" => Ok(Command::Render),
        "x" | "close" => Ok(Command::Event(InputEvent::CloseDetail)),
        "c" | "cat" => {
            if arg.is_empty() {
                return Err("用法：:c <序号|分类名>".to_string());
            }
            // 先按标签精确匹配，再按序号
            let label = if categories.iter().any(|c| c == arg) {
                arg.to_string()
            } else {
                match arg.parse::<usize>() {
                    Ok(n) if (1..=categories.len()).contains(&n) => categories[n - 1].clone(),
                    _ => arg.to_string(),
                }
            };
            Ok(Command::Event(InputEvent::SelectCategory(label)))
        }
        "d" | "dish" => arg
            .parse::<u32>()
            .map(|id| Command::Event(InputEvent::OpenDish(DishId(id))))
            .map_err(|_| format!("无效的菜品编号：{arg:?}")),
        _ => Err(format!("未知命令 :{cmd}，输入 :h 查看帮助")),
    }
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "直接输入文字：按菜名/拼音搜索（/ 清空搜索）")?;
    writeln!(out, ":c <序号|分类名>  切换分类")?;
    writeln!(out, ":d <编号>         查看菜品详情")?;
    writeln!(out, ":x                关闭详情")?;
    writeln!(out, ":l                重新显示")?;
    writeln!(out, ":q                退出")
}

fn render(out: &mut impl Write, view: &MenuView) -> io::Result<()> {
    writeln!(out, "--------------------")?;
    write!(out, "分类：")?;
    for (i, c) in view.categories.iter().enumerate() {
        if *c == view.selected_category {
            write!(out, " {}.[{c}]", i + 1)?;
        } else {
            write!(out, " {}.{c}", i + 1)?;
        }
    }
    writeln!(out)?;
    if !view.search_term.is_empty() {
        writeln!(out, "搜索：{}", view.search_term)?;
    }

    if view.is_empty() {
        writeln!(out, "  没有找到相关菜品")?;
    }
    for d in &view.dishes {
        writeln!(out, "  {}. {} ({}) ¥{} [{}]", d.id, d.name, d.pinyin_name, d.price, d.category)?;
    }

    if let Some(d) = &view.selected_dish {
        writeln!(out, "==== {} ====", d.name)?;
        writeln!(out, "拼音：{}", d.pinyin_name)?;
        writeln!(out, "分类：{}", d.category)?;
        writeln!(out, "价格：¥{}", d.price)?;
        if !d.image.is_empty() {
            writeln!(out, "图片：{}", d.image)?;
        }
        if !d.description.is_empty() {
            writeln!(out, "{}", d.description)?;
        }
        writeln!(out, "(:x 关闭详情)")?;
    }
    out.flush()
}

fn repl(session: &mut Session, catalog_path: &Path, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    let mut line = String::new();
    writeln!(out, "点菜系统 | catalog: {}", catalog_path.display())?;
    writeln!(out, "输入 :h 查看帮助，:q 退出。")?;
    render(out, &session.view())?;

    loop {
        line.clear();
        write!(out, "menu> ")?;
        out.flush()?;
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if strip_newline(&line).is_empty() {
            continue;
        }
        let categories = session.view().categories;
        match parse_command(&line, &categories) {
            Ok(Command::Event(InputEvent::Exit)) => {
                session.handle(InputEvent::Exit);
                break;
            }
            Ok(Command::Event(ev)) => {
                let view = session.handle(ev);
                render(out, &view)?;
            }
            Ok(Command::Render) => render(out, &session.view())?,
            Ok(Command::Help) => print_help(out)?,
            Err(msg) => writeln!(out, "{msg}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::{ALL_CATEGORIES, catalog::Catalog, model::Dish};

    fn categories() -> Vec<String> {
        vec![ALL_CATEGORIES.to_string(), "川菜".to_string(), "海鲜".to_string()]
    }

    fn session() -> Session {
        let dish = |id: u32, name: &str, pinyin: &str, category: &str| Dish {
            id: DishId(id),
            name: name.to_string(),
            pinyin_name: pinyin.to_string(),
            category: category.to_string(),
            description: "招牌".to_string(),
            price: 30,
            image: String::new(),
        };
        let catalog = Catalog::new(vec![
            dish(1, "麻婆豆腐", "mapo doufu", "川菜"),
            dish(2, "宫保鸡丁", "gongbao jiding", "川菜"),
            dish(3, "清蒸鱼", "qingzheng yu", "海鲜"),
        ])
        .expect("catalog");
        Session::new(Engine::new(catalog))
    }

    #[test]
    fn plain_text_is_a_search() {
        assert_eq!(
            parse_command("gong\n", &categories()),
            Ok(Command::Event(InputEvent::Search("gong".into())))
        );
        assert_eq!(
            parse_command("fu \r\n", &categories()),
            Ok(Command::Event(InputEvent::Search("fu ".into())))
        );
        assert_eq!(
            parse_command(" \n", &categories()),
            Ok(Command::Event(InputEvent::Search(" ".into())))
        );
        assert_eq!(
            parse_command("/", &categories()),
            Ok(Command::Event(InputEvent::Search(String::new())))
        );
    }

    #[test]
    fn category_by_index_or_label() {
        assert_eq!(
            parse_command(":c 3", &categories()),
            Ok(Command::Event(InputEvent::SelectCategory("海鲜".into())))
        );
        assert_eq!(
            parse_command(":c 川菜", &categories()),
            Ok(Command::Event(InputEvent::SelectCategory("川菜".into())))
        );
        // 超出范围的序号按标签原样传入
        assert_eq!(
            parse_command(":c 9", &categories()),
            Ok(Command::Event(InputEvent::SelectCategory("9".into())))
        );
        assert!(parse_command(":c", &categories()).is_err());
    }

    #[test]
    fn numeric_label_wins_over_index() {
        let cats = vec![ALL_CATEGORIES.to_string(), "2".to_string(), "海鲜".to_string()];
        assert_eq!(
            parse_command(":c 2", &cats),
            Ok(Command::Event(InputEvent::SelectCategory("2".into())))
        );
        assert_eq!(
            parse_command(":c 3", &cats),
            Ok(Command::Event(InputEvent::SelectCategory("海鲜".into())))
        );
    }

    #[test]
    fn repl_keeps_whitespace_in_search() {
        let mut s = session();
        let mut input = io::Cursor::new("fu \r\n\n:q\n");
        let mut buf = Vec::new();
        repl(&mut s, Path::new("test.tsv"), &mut input, &mut buf).expect("repl");
        assert_eq!(s.selection().search_term, "fu ");
    }

    #[test]
    fn detail_commands() {
        assert_eq!(
            parse_command(":d 2", &categories()),
            Ok(Command::Event(InputEvent::OpenDish(DishId(2))))
        );
        assert!(parse_command(":d two", &categories()).is_err());
        assert_eq!(parse_command(":x", &categories()), Ok(Command::Event(InputEvent::CloseDetail)));
        assert_eq!(parse_command(":q", &categories()), Ok(Command::Event(InputEvent::Exit)));
        assert!(parse_command(":zz", &categories()).is_err());
    }

    #[test]
    fn render_shows_empty_indicator() {
        let mut s = session();
        let view = s.handle(InputEvent::Search("xyz".into()));
        let mut buf = Vec::new();
        render(&mut buf, &view).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("没有找到相关菜品"));
        assert!(text.contains("1.[全部]"));
    }

    #[test]
    fn repl_session_transcript() {
        let mut s = session();
        let mut input = io::Cursor::new(":c 2\ngong\n:d 2\n:x\n:q\nignored\n");
        let mut buf = Vec::new();
        repl(&mut s, Path::new("test.tsv"), &mut input, &mut buf).expect("repl");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.contains("2.[川菜]"));
        assert!(text.contains("==== 宫保鸡丁 ===="));
        assert_eq!(s.selection().search_term, "gong");
        assert_eq!(s.selection().selected_category, "川菜");
        assert_eq!(s.selection().selected_dish, None);
    }
}
