use anyhow::{bail, Context, Result};
use snarkcall::{build_arguments, parse_calldata, Scheme};

pub fn run(source: &str, scheme: &str, from_file: bool) -> Result<()> {
    let scheme = match scheme {
        "groth16" => Scheme::Groth16,
        "plonk" => Scheme::Plonk,
        other => bail!("unknown scheme {other:?} (expected groth16 or plonk)"),
    };
    let raw = if from_file {
        std::fs::read_to_string(source).with_context(|| format!("cannot read {source}"))?
    } else {
        source.to_string()
    };
    let tokens = parse_calldata(raw.trim(), scheme)?;
    let args = build_arguments(&tokens, scheme)?;
    println!("{}", serde_json::to_string_pretty(&args)?);
    Ok(())
}
