use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        force: bool,
    },
    /// Load the configuration and report every problem found
    Validate,
    /// Start the web front end
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        /// Open the login page in the default browser once listening
        #[clap(long)]
        open: bool,
    },
    /// Run a single analysis request and print the payload
    Fetch {
        #[clap(short, long)]
        topic: Option<String>,
        #[clap(short, long)]
        limit: Option<u32>,
    },
    /// Print the technical analysis report as JSON
    Report,
}
