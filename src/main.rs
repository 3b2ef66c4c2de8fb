use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use ignite_shop::api::{load_product, load_products, set_silent};
use ignite_shop::config::{self, Config, DEFAULT_HOST, DEFAULT_PORT};
use ignite_shop::models::ProductView;
use ignite_shop::{build_router, AppState};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    match AppState::from_config(Config::from_env()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::red("Failed to initialise"), e);
            process::exit(1);
        }
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    if !state.stripe.has_secret_key() {
        tracing::warn!("STRIPE_SECRET_KEY is not set; product pages will fail to load");
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting Ignite Shop server");
    println!("{} {}", yansi::Paint::new("Shop running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn print_products(products: &[ProductView]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    table.set_header(vec!["ID", "Name", "Price", "Default price", "Image", "Description"]);
    for p in products {
        table.add_row(vec![
            p.id.as_str(),
            p.name.as_str(),
            p.price.as_str(),
            p.default_price_id.as_str(),
            p.image_url.as_str(),
            p.description.as_str(),
        ]);
    }
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "shop",
    author,
    version,
    about = "Ignite Shop storefront",
    long_about = r#"Ignite Shop - a product page backed by the Stripe catalog with hosted checkout.

Configure STRIPE_SECRET_KEY (and optionally PUBLIC_BASE_URL, STRIPE_API_BASE_URL,
REVALIDATE_SECONDS, STRIPE_TIMEOUT_SECONDS) through the environment or a .env file.

Examples:
  1) Run the storefront:
      shop serve --host 127.0.0.1 --port 3000
  2) Inspect a product as the page would render it:
      shop product prod_123
"#,
    after_help = "Use `shop <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration and Stripe connectivity
    #[command(long_about = "Ensure STRIPE_SECRET_KEY is set and that the catalog can be listed with it.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Show a product the way its page renders it
    Product {
        product_id: String,
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        set_silent(true);
    }

    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            if !state.stripe.has_secret_key() {
                eprintln!("{}", yansi::Paint::new("STRIPE_SECRET_KEY is not configured").red());
                process::exit(1);
            }
            match load_products(&state.stripe).await {
                Ok(products) => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!("Configuration looks valid ({} products returned)", products.len())).green()
                    );
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Product { product_id, env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            match load_product(&state.stripe, &product_id).await {
                Ok(view) => print_products(std::slice::from_ref(&view)),
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to load product").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}
