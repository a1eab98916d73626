fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let shell = mandelzoom::ExplorerShell::new(mandelzoom::ExplorerConfig::default());

    shell.run()
}
