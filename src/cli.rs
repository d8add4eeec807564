use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "covidmapsrv",
    about = "HTTP service that renders COVID-19 country case markers for an interactive map",
    version,
    author
)]
pub struct Args {
    /// Fetch the snapshot once, print the rendered marker layer as JSON
    /// to stdout and exit without starting the server
    #[arg(long)]
    pub once: bool,

    /// Override the snapshot endpoint URL from the environment
    #[arg(long)]
    pub snapshot_url: Option<String>,
}
