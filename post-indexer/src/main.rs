use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use blog_common::{validate_compressed_data, Post, PostId};
use post_filter::builder::CatalogBuilder;
use post_filter::{select_featured, select_remainder, PostCatalog, PostLookup};
use post_filter::{NO_MATCHES_MESSAGE, POST_NOT_FOUND_MESSAGE, POST_NOT_FOUND_TITLE};

mod frontmatter;

/// 输出目录中的目录文件名
const CATALOG_FILE: &str = "catalog.bin";

fn cli() -> Command {
    let index_arg = Arg::new("index")
        .short('i')
        .long("index")
        .value_name("CATALOG")
        .help("目录文件路径")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    Command::new("post-indexer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("生成和查询博客文章目录")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("显示详细信息")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("build")
                .about("从Markdown文章目录生成目录文件")
                .arg(
                    Arg::new("source")
                        .short('s')
                        .long("source")
                        .value_name("SOURCE_DIR")
                        .help("文章源目录路径")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("OUTPUT_DIR")
                        .help("目录输出路径")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                ),
        )
        .subcommand(Command::new("tags").about("列出全部标签").arg(index_arg.clone()))
        .subcommand(
            Command::new("query")
                .about("按关键词和标签筛选文章")
                .arg(index_arg.clone())
                .arg(
                    Arg::new("search")
                        .short('q')
                        .long("search")
                        .value_name("TERM")
                        .help("标题或摘要中的关键词")
                        .default_value(""),
                )
                .arg(
                    Arg::new("tag")
                        .short('t')
                        .long("tag")
                        .value_name("TAG")
                        .help("精确匹配的标签"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("显示一篇文章")
                .arg(index_arg)
                .arg(
                    Arg::new("id")
                        .long("id")
                        .value_name("ID")
                        .help("文章ID")
                        .value_parser(value_parser!(PostId))
                        .required(true),
                ),
        )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("build", sub)) => run_build(sub),
        Some(("tags", sub)) => run_tags(sub),
        Some(("query", sub)) => run_query(sub),
        Some(("show", sub)) => run_show(sub),
        _ => unreachable!("subcommand_required"),
    }
}

fn required_path<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a PathBuf> {
    matches
        .get_one::<PathBuf>(name)
        .with_context(|| format!("缺少参数 --{}", name))
}

fn run_build(matches: &ArgMatches) -> Result<()> {
    let source_dir = required_path(matches, "source")?;
    let output_dir = required_path(matches, "output")?;
    build_catalog(source_dir, output_dir)?;
    Ok(())
}

/// 扫描源目录并写出目录文件，返回目录文件路径
fn build_catalog(source_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    if !source_dir.is_dir() {
        bail!("源目录不存在或不是有效目录 '{}'", source_dir.display());
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("无法创建输出目录 '{}'", output_dir.display()))?;

    let start_time = Instant::now();
    info!(source = %source_dir.display(), output = %output_dir.display(), "开始生成目录");

    let (posts, skipped) = frontmatter::scan_posts(source_dir)?;
    info!(posts = posts.len(), skipped, "扫描完成");
    if posts.is_empty() {
        bail!("没有找到有效文章");
    }

    let mut builder = CatalogBuilder::new();
    for post in posts {
        builder.add_post(post);
    }

    let catalog_path = output_dir.join(CATALOG_FILE);
    builder.save(&catalog_path)?;

    info!(elapsed_secs = start_time.elapsed().as_secs_f64(), "目录生成完成");
    Ok(catalog_path)
}

fn load_catalog(path: &Path) -> Result<PostCatalog> {
    let data = fs::read(path).with_context(|| format!("无法读取目录文件 '{}'", path.display()))?;
    let version = validate_compressed_data(&data)
        .with_context(|| format!("'{}' 不是有效的目录文件", path.display()))?;
    debug!(major = version[0], minor = version[1], "目录格式版本");
    Ok(PostCatalog::from_compressed(&data)?)
}

fn run_tags(matches: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(required_path(matches, "index")?)?;
    write_tags(&mut io::stdout().lock(), &catalog)?;
    Ok(())
}

fn run_query(matches: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(required_path(matches, "index")?)?;
    let search = matches.get_one::<String>("search").map(String::as_str).unwrap_or("");
    let tag = matches.get_one::<String>("tag").map(String::as_str);

    write_query(&mut io::stdout().lock(), &catalog, search, tag)?;
    Ok(())
}

fn run_show(matches: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(required_path(matches, "index")?)?;
    let id = *matches.get_one::<PostId>("id").context("缺少参数 --id")?;

    write_lookup(&mut io::stdout().lock(), catalog.lookup(id))?;
    Ok(())
}

fn write_tags<W: Write>(out: &mut W, catalog: &PostCatalog) -> io::Result<()> {
    for tag in catalog.tags() {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}

/// 列表页的文本形式：第一篇置顶，其余按原顺序
fn write_query<W: Write>(out: &mut W, catalog: &PostCatalog, search: &str, tag: Option<&str>) -> io::Result<()> {
    let filtered = post_filter::filter_posts(catalog.posts(), search, tag);
    if filtered.is_empty() {
        return writeln!(out, "{}", NO_MATCHES_MESSAGE);
    }

    if let Some(featured) = select_featured(&filtered) {
        writeln!(out, "Featured Post")?;
        write_summary(out, featured)?;
    }
    let remainder = select_remainder(&filtered);
    if !remainder.is_empty() {
        writeln!(out, "\nLatest Posts")?;
        for post in remainder {
            write_summary(out, post)?;
        }
    }
    Ok(())
}

fn write_lookup<W: Write>(out: &mut W, lookup: PostLookup<'_>) -> io::Result<()> {
    match lookup {
        PostLookup::Found(post) => {
            write_summary(out, post)?;
            writeln!(out, "\n{}", post.content)
        }
        PostLookup::NotFound(id) => {
            warn!(id, "文章不存在");
            writeln!(out, "{}", POST_NOT_FOUND_TITLE)?;
            writeln!(out, "{}", POST_NOT_FOUND_MESSAGE)
        }
    }
}

fn write_summary<W: Write>(out: &mut W, post: &Post) -> io::Result<()> {
    writeln!(out, "  [{}] {}", post.id, post.title)?;
    writeln!(out, "      {} | {} | {}", post.author, post.display_date(), post.read_time)?;
    if !post.tags.is_empty() {
        writeln!(out, "      {}", post.tags.join(", "))?;
    }
    writeln!(out, "      {}", post.excerpt)
}
