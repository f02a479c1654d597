/// Strategy for displaying version information.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input<'a> = ();

    fn execute(&self, _input: Self::Input<'_>) -> anyhow::Result<()> {
        println!("sarf {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
