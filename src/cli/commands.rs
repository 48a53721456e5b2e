//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "profiletwin")]
#[command(about = "Digital twin that answers questions about a professional profile")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST + MCP API server
    Serve {
        /// Host to bind (default from config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (default from config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable permissive CORS
        #[arg(long)]
        cors: bool,
    },
    /// Ask one or more questions about the profile
    Ask {
        /// Questions, answered in order
        #[arg(required = true)]
        questions: Vec<String>,
        /// Keep answering after a failed question
        #[arg(long)]
        keep_going: bool,
        /// Print retrieved sources
        #[arg(long)]
        sources: bool,
    },
    /// Search the profile by keywords
    Search {
        /// Search keywords
        query: String,
        /// Restrict results to one category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List profile sections
    Sections,
    /// Check connectivity to the vector database and LLM
    Health,
    /// Upsert profile chunks from a JSON file into the vector index
    Index {
        /// Path to a JSON array of profile chunks
        file: PathBuf,
    },
    /// Show current configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_multiple_questions() {
        let cli = Cli::try_parse_from(["profiletwin", "ask", "What?", "Why?", "--keep-going"])
            .unwrap();
        match cli.command {
            Commands::Ask {
                questions,
                keep_going,
                sources,
            } => {
                assert_eq!(questions, vec!["What?", "Why?"]);
                assert!(keep_going);
                assert!(!sources);
            }
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_parse_search_with_category() {
        let cli = Cli::try_parse_from(["profiletwin", "-v", "search", "rust", "-c", "projects"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Search { ref query, category: Some(ref c) } if query == "rust" && c == "projects"
        ));
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["profiletwin", "ask"]).is_err());
    }
}
