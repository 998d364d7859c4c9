use clap::{CommandFactory, Parser};

use git_version::config::Config;
use git_version::resolver::VersionResolver;
use git_version::runner::ProcessRunner;
use git_version::ui;
use git_version::Result;

#[derive(clap::Parser)]
#[command(
    name = "git-version",
    about = "Supplies version information based on git tags"
)]
struct Args {
    #[arg(short, long, help = "Complete version string")]
    full: bool,

    #[arg(short, long, help = "Current version tag")]
    tag: bool,

    #[arg(short, long, help = "Current commit hash")]
    commit: bool,

    #[arg(short, long, help = "Current major version number")]
    major: bool,

    #[arg(short = 'n', long, help = "Current minor version number")]
    minor: bool,

    #[arg(short, long, help = "Current patch version number")]
    patch: bool,

    #[arg(short, long, help = "Check if built off a commit without a tag")]
    develop: bool,

    #[arg(short = 'D', long, help = "Check if built with unpushed changes")]
    dirty: bool,

    #[arg(short = 'M', long = "next_major", help = "Next major version number")]
    next_major: bool,

    #[arg(short = 'N', long = "next_minor", help = "Next minor version number")]
    next_minor: bool,

    #[arg(short = 'P', long = "next_patch", help = "Next patch version number")]
    next_patch: bool,

    #[arg(short, long, help = "Every version field as a JSON object")]
    all: bool,
}

fn main() {
    let args = Args::parse();

    let resolver = VersionResolver::new(ProcessRunner::new(), Config::default());

    // When several flags are set, this chain decides which one wins; the
    // order is part of the CLI contract and differs from the help listing
    let answer: Result<String> = if args.tag {
        Ok(resolver.tag())
    } else if args.commit {
        Ok(resolver.commit())
    } else if args.major {
        Ok(resolver.major())
    } else if args.minor {
        Ok(resolver.minor())
    } else if args.patch {
        Ok(resolver.patch())
    } else if args.develop {
        Ok(resolver.develop())
    } else if args.dirty {
        Ok(resolver.dirty())
    } else if args.next_major {
        resolver.next_major().map(|n| n.to_string())
    } else if args.next_minor {
        resolver.next_minor().map(|n| n.to_string())
    } else if args.next_patch {
        resolver.next_patch().map(|n| n.to_string())
    } else if args.full {
        Ok(resolver.full_version())
    } else if args.all {
        resolver
            .report()
            .and_then(|report| Ok(serde_json::to_string(&report)?))
    } else {
        eprint!("{}", Args::command().render_help());
        std::process::exit(1);
    };

    match answer {
        Ok(value) => println!("{}", value),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
