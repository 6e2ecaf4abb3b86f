use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trail_gallery::catalog::Catalog;
use trail_gallery::config::{self, GalleryConfig};
use trail_gallery::detail::DetailState;
use trail_gallery::filter::{self, ALL_IMAGES, CategoryFilter, SortKey};
use trail_gallery::gallery::Gallery;
use trail_gallery::output;

#[derive(Parser)]
#[command(name = "trail-gallery")]
#[command(about = "Search, filter and sort a photo gallery catalog")]
#[command(long_about = "\
Search, filter and sort a photo gallery catalog

The catalog is a JSON array of image records kept next to an optional
config.toml:

  gallery/
  ├── config.toml      # Optional settings (see 'trail-gallery gen-config')
  └── catalog.json     # [{\"id\": \"1\", \"title\": \"Sunrise Peak\", \"tags\": [...], ...}]

Search and category filter are independent: both run against the whole
catalog and only images matching both are shown, in the sort order.

  Search:   case-insensitive substring of title, location, description or a tag
  Filter:   category label, e.g. \"Alpine Lake\" (matches tag alpine-lake)
  Sort:     popular (catalog order), newest, most-downloaded, most-liked")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml and the catalog
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Catalog file (overrides `catalog` in config.toml)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Query state flags shared by commands that show a view.
#[derive(clap::Args, Clone)]
struct QueryArgs {
    /// Free-text search
    #[arg(long, short, default_value = "")]
    query: String,

    /// Category label
    #[arg(long, short, default_value = ALL_IMAGES)]
    filter: String,

    /// Sort order
    #[arg(long, short, value_enum, default_value_t = SortArg::Popular)]
    sort: SortArg,
}

#[derive(ValueEnum, Clone, Copy)]
enum SortArg {
    Popular,
    Newest,
    MostDownloaded,
    MostLiked,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Popular => SortKey::Popular,
            SortArg::Newest => SortKey::Newest,
            SortArg::MostDownloaded => SortKey::MostDownloaded,
            SortArg::MostLiked => SortKey::MostLiked,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show the images matching a search, filter and sort
    Browse {
        #[command(flatten)]
        query: QueryArgs,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List filter categories (curated chips and "More")
    Categories {
        /// Category to mark as active
        #[arg(long, default_value = ALL_IMAGES)]
        active: String,
    },
    /// List the most frequent tags
    Tags,
    /// Show one image by id, or by a query string such as '?modal=7'
    Show {
        target: String,
        /// Query state used to find previous/next images
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Validate config and catalog without querying
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Browse { query, json } => {
            let (config, catalog) = load(&cli)?;
            let gallery = open_gallery(&catalog, &config, query);
            let view = gallery.view();
            if *json {
                let payload = serde_json::json!({ "state": gallery.state(), "view": view });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                output::print_view(&view, gallery.state());
            }
        }
        Command::Categories { active } => {
            let (config, catalog) = load(&cli)?;
            let available = filter::available_categories(catalog.records());
            let menu = filter::category_menu(&available, &config.filters.main_categories);
            output::print_menu(&menu, &CategoryFilter::from_label(active));
        }
        Command::Tags => {
            let (config, catalog) = load(&cli)?;
            let view = Gallery::new(&catalog)
                .with_popular_tag_limit(config.search.popular_tags)
                .view();
            output::print_popular_tags(&view.popular_tags);
        }
        Command::Show { target, query } => {
            let (config, catalog) = load(&cli)?;
            let detail = resolve_detail(target);
            let Some(record) = detail.current(&catalog) else {
                return Err(format!("image {:?} not found", detail.open_id().unwrap_or("")).into());
            };
            output::print_detail(record);

            let gallery = open_gallery(&catalog, &config, query);
            let view = gallery.view();
            if let (Some(prev), Some(next)) = (
                detail.previous_in(&view.filtered_images),
                detail.next_in(&view.filtered_images),
            ) {
                println!("Previous: {prev}  Next: {next}");
            }
            println!("Link: ?{}", detail.to_query());
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.display());
            let (_, catalog) = load(&cli)?;
            let categories = filter::available_categories(catalog.records()).len() - 1;
            output::print_check(&catalog, categories);
            println!("==> Catalog is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config from `--root`, then the catalog it (or `--catalog`) names.
fn load(cli: &Cli) -> Result<(GalleryConfig, Catalog), Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.root)?;
    let path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog_path(&cli.root));
    let catalog = Catalog::load(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok((config, catalog))
}

fn open_gallery<'a>(catalog: &'a Catalog, config: &GalleryConfig, args: &QueryArgs) -> Gallery<'a> {
    let mut gallery = Gallery::new(catalog).with_popular_tag_limit(config.search.popular_tags);
    gallery.set_search_query(args.query.as_str());
    gallery.set_active_filter(CategoryFilter::from_label(&args.filter));
    gallery.set_active_sort(args.sort.into());
    gallery
}

/// Accept a bare id or a URL query string carrying `modal=<id>`.
fn resolve_detail(target: &str) -> DetailState {
    if target.starts_with('?') || target.contains(&format!("{}=", trail_gallery::detail::MODAL_PARAM)) {
        DetailState::from_query(target)
    } else {
        let mut detail = DetailState::default();
        detail.open(target);
        detail
    }
}
