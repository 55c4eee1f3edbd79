use anyhow::{Context, Result};
use clap::Args;
use tabletype::{PrimitiveType, Type, core::DEFAULT_CRS, parse_type};

#[derive(Args)]
pub struct InspectArgs {
    /// Type descriptor to inspect
    descriptor: String,
}

impl InspectArgs {
    pub fn run(self) -> Result<()> {
        let ty = parse_type(&self.descriptor)
            .with_context(|| format!("invalid descriptor {:?}", self.descriptor))?;

        println!("type: {ty}");
        println!("id: {}", ty.type_id());
        println!("primitive: {}", ty.is_primitive());
        println!("nested: {}", ty.is_nested());
        for (name, value) in parameters(&ty) {
            println!("{name}: {value}");
        }
        Ok(())
    }
}

fn parameters(ty: &Type) -> Vec<(&'static str, String)> {
    let Some(primitive) = ty.as_primitive() else {
        return Vec::new();
    };
    match primitive {
        PrimitiveType::Timestamp { adjust_to_utc }
        | PrimitiveType::TimestampNs { adjust_to_utc } => {
            vec![("adjust_to_utc", adjust_to_utc.to_string())]
        }
        PrimitiveType::Fixed(length) => vec![("length", length.to_string())],
        PrimitiveType::Decimal(decimal) => vec![
            ("precision", decimal.precision().to_string()),
            ("scale", decimal.scale().to_string()),
        ],
        PrimitiveType::Geometry(geometry) => {
            vec![("crs", geometry.crs().unwrap_or(DEFAULT_CRS).to_string())]
        }
        PrimitiveType::Geography(geography) => {
            let mut params = vec![("crs", geography.crs().unwrap_or(DEFAULT_CRS).to_string())];
            if let Some(algorithm) = geography.algorithm() {
                params.push(("algorithm", algorithm.to_string()));
            }
            params
        }
        _ => Vec::new(),
    }
}
