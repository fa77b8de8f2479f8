use anyhow::{Context, Result};
use clap::Parser;
use ghres::{Asset, Color, Release, Repository, Request, Server};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// ghres - GitHub release resources
///
/// Build GitHub release API requests and decode their responses.
///
/// Examples:
///   ghres request owner/repo latest       # Show the latest-release request
///   ghres decode release response.json    # Decode a saved response
#[derive(Parser, Debug)]
#[command(author, version = env!("GHRES_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com; also via GITHUB_API_URL)
    #[arg(long = "api-url", env = "GITHUB_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the request for a release endpoint
    Request(RequestArgs),

    /// Decode a JSON response body
    Decode(DecodeArgs),

    /// Parse a six digit hex color
    Color(ColorArgs),
}

#[derive(clap::Args, Debug)]
pub struct RequestArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: String,

    #[command(subcommand)]
    pub endpoint: Endpoint,
}

#[derive(clap::Subcommand, Debug)]
pub enum Endpoint {
    /// The latest published release
    Latest,
    /// All releases
    List,
    /// The release for a tag
    Tag {
        #[arg(value_name = "TAG")]
        tag: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// What the document contains
    #[arg(value_enum)]
    pub kind: ResourceKind,

    /// JSON file to read, or "-" for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ResourceKind {
    Release,
    Releases,
    Asset,
}

#[derive(clap::Args, Debug)]
pub struct ColorArgs {
    /// Six hex digits, e.g. "FF8000"
    #[arg(value_name = "HEX")]
    pub hex: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Request(args) => {
            let server = Server::from_api_url(cli.api_url.as_deref())?;
            show_request(&server, &args)?
        }
        Commands::Decode(args) => decode(&args)?,
        Commands::Color(args) => {
            let color: Color = args.hex.parse()?;
            println!("{}", color);
        }
    }
    Ok(())
}

fn show_request(server: &Server, args: &RequestArgs) -> Result<()> {
    let repo: Repository = args.repo.parse()?;
    let line = match &args.endpoint {
        Endpoint::Latest => request_line(server, &repo.latest_release()),
        Endpoint::List => request_line(server, &repo.releases()),
        Endpoint::Tag { tag } => request_line(server, &repo.release_for_tag(tag)),
    };
    println!("{}", line);
    Ok(())
}

fn request_line<T>(server: &Server, request: &Request<T>) -> String {
    format!("{} {}", request.method(), request.url(server))
}

fn read_input(file: &Path) -> Result<Vec<u8>> {
    if file.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn decode(args: &DecodeArgs) -> Result<()> {
    let body = read_input(&args.file)?;
    debug!("Decoding {:?} from {}", args.kind, args.file.display());

    match args.kind {
        ResourceKind::Release => {
            let release: Release = ghres::resource::decode(&body)?;
            print_release(&release);
        }
        ResourceKind::Releases => {
            let releases: Vec<Release> = ghres::resource::decode(&body)?;
            for release in &releases {
                print_release(release);
            }
        }
        ResourceKind::Asset => {
            let asset: Asset = ghres::resource::decode(&body)?;
            print_asset(&asset);
        }
    }
    Ok(())
}

fn print_release(release: &Release) {
    let mut flags = Vec::new();
    if release.is_draft {
        flags.push("draft");
    }
    if release.is_prerelease {
        flags.push("prerelease");
    }
    println!(
        "{}\t{}\t{}\t{}{}",
        release.tag,
        release.name.as_deref().unwrap_or("-"),
        release.published_at.to_rfc3339(),
        release.url,
        if flags.is_empty() {
            String::new()
        } else {
            format!("\t({})", flags.join(", "))
        }
    );
    for asset in &release.assets {
        print!("  ");
        print_asset(asset);
    }
}

fn print_asset(asset: &Asset) {
    println!("{}\t{}\t{}", asset.name, asset.content_type, asset.url);
}
