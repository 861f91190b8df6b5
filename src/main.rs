fn main() -> anyhow::Result<()> {
    queens_configurator::runner::run()
}
