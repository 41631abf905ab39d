fn main() -> anyhow::Result<()> {
    provenance_listing::cli::commands::run()
}
