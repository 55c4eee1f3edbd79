use anyhow::{Context, Result};
use clap::Args;
use tabletype::{parse_primitive, parse_type};
use tracing::debug;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Type descriptors, e.g. `DECIMAL(9,2)` or `geometry(ogc:crs84)`
    #[arg(required = true)]
    descriptors: Vec<String>,

    /// Reject descriptors that do not name a primitive type
    #[arg(short, long)]
    primitive: bool,
}

impl NormalizeArgs {
    pub fn run(self) -> Result<()> {
        for descriptor in &self.descriptors {
            let text = if self.primitive {
                parse_primitive(descriptor).map(|ty| ty.to_string())
            } else {
                parse_type(descriptor).map(|ty| ty.to_string())
            }
            .with_context(|| format!("invalid descriptor {descriptor:?}"))?;
            debug!(
                descriptor = descriptor.as_str(),
                canonical = text.as_str(),
                "normalized descriptor"
            );
            println!("{text}");
        }
        Ok(())
    }
}
