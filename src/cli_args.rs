use clap::Parser;

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Path to the configuration file. Defaults apply if omitted.
    #[clap(long, env = "CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Value of the `Authorization` header to inspect. Omit to simulate a request without one.
    #[clap(long, env = "AUTHORIZATION")]
    pub authorization: Option<String>,
}
