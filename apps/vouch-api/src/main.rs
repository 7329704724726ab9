use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = vouch_api::Args::parse();
	vouch_api::run(args).await
}
