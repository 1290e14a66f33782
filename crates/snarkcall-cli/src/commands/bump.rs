use std::path::Path;

use anyhow::{bail, Context, Result};
use snarkcall::{patch_file, PatchRule};

const PRAGMA_VERSION: &str = "0.8.0";

/// (generated file, generated contract name, deployed contract name)
const VERIFIERS: &[(&str, &str, &str)] = &[
    ("HelloWorldVerifier.sol", "Verifier", "HelloWorldVerifier"),
    ("Multiplier3Verifier.sol", "Verifier", "Multiplier3Verifier"),
    (
        "_plonkMultiplier3Verifier.sol",
        "PlonkVerifier",
        "_plonkMultiplier3Verifier",
    ),
];

pub fn run(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }
    for (file, from, to) in VERIFIERS {
        let path = dir.join(file);
        if !path.exists() {
            println!("skipped  {} (not generated yet)", path.display());
            continue;
        }
        let rules = [
            PatchRule::pragma(PRAGMA_VERSION),
            PatchRule::rename_contract(from, to),
        ];
        patch_file(&path, &rules).with_context(|| format!("patching {}", path.display()))?;
        println!("patched  {}", path.display());
    }
    Ok(())
}
