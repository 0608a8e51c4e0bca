use std::path::{Path, PathBuf};

use alloy::primitives::{hex, Bytes};
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use crate::errors::ArtifactError;

/// Creation bytecode of a compiled contract.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub path: PathBuf,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    bytecode: RawBytecode,
}

/// Hardhat stores a hex string, Foundry an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

impl RawBytecode {
    fn into_hex(self) -> String {
        match self {
            RawBytecode::Hex(hex) => hex,
            RawBytecode::Object { object } => object,
        }
    }
}

/// Locates compiled contracts below a build output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self
            .find(name)
            .await
            .ok_or_else(|| ArtifactError::NotFound {
                name: name.to_string(),
                dir: self.root.clone(),
            })?;

        debug!(target: "nftdeploy::artifacts", "loading {name} from {}", path.display());

        let contents = fs::read_to_string(&path)
            .await
            .map_err(|source| ArtifactError::Io {
                path: path.clone(),
                source,
            })?;

        parse_artifact(name, &path, &contents)
    }

    async fn find(&self, name: &str) -> Option<PathBuf> {
        let file_name = format!("{name}.json");
        let source_dir = format!("{name}.sol");

        // hardhat, then foundry
        let candidates = [
            self.root.join("contracts").join(&source_dir).join(&file_name),
            self.root.join(&source_dir).join(&file_name),
        ];

        for path in candidates {
            if is_file(&path).await {
                return Some(path);
            }
        }

        search(&self.root, &file_name).await
    }
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .is_ok_and(|metadata| metadata.is_file())
}

/// Depth first, files of a directory before its subdirectories in name order.
async fn search(root: &Path, file_name: &str) -> Option<PathBuf> {
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let Ok(mut entries) = fs::read_dir(&dir).await else {
            continue;
        };

        let mut subdirs = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            let Ok(file_type) = entry.file_type().await else {
                continue;
            };

            if file_type.is_dir() {
                if path.file_name().is_some_and(|n| n == "build-info") {
                    continue;
                }
                subdirs.push(path);
            } else if path.file_name().is_some_and(|n| n == file_name) {
                return Some(path);
            }
        }

        subdirs.sort();
        pending.extend(subdirs.into_iter().rev());
    }

    None
}

pub fn parse_artifact(name: &str, path: &Path, contents: &str) -> Result<Artifact, ArtifactError> {
    let raw: RawArtifact =
        serde_json::from_str(contents).map_err(|source| ArtifactError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let code = raw.bytecode.into_hex();
    // solc leaves `__$<hash>$__` placeholders for libraries that still need an address
    if code.contains("__") {
        return Err(ArtifactError::UnlinkedLibraries {
            name: name.to_string(),
        });
    }

    let bytecode = hex::decode(code.trim()).map_err(|source| ArtifactError::InvalidBytecode {
        name: name.to_string(),
        source,
    })?;

    if bytecode.is_empty() {
        return Err(ArtifactError::EmptyBytecode {
            name: name.to_string(),
        });
    }

    Ok(Artifact {
        name: name.to_string(),
        path: path.to_path_buf(),
        bytecode: Bytes::from(bytecode),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_hardhat_layout() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "contracts/SVGNFT.sol/SVGNFT.json",
            r#"{ "contractName": "SVGNFT", "abi": [], "bytecode": "0x6080604052" }"#,
        );

        let artifact = ArtifactStore::new(dir.path()).load("SVGNFT").await.unwrap();
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[tokio::test]
    async fn test_foundry_layout() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "LinkToken.sol/LinkToken.json",
            r#"{ "abi": [], "bytecode": { "object": "0x6001", "linkReferences": {} } }"#,
        );

        let artifact = ArtifactStore::new(dir.path()).load("LinkToken").await.unwrap();
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x01]);
    }

    #[tokio::test]
    async fn test_nested_search() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "@chainlink/contracts/src/v0.6/tests/VRFCoordinatorMock.sol/VRFCoordinatorMock.json",
            r#"{ "bytecode": "0x6002" }"#,
        );

        let artifact = ArtifactStore::new(dir.path())
            .load("VRFCoordinatorMock")
            .await
            .unwrap();
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x02]);
    }

    #[tokio::test]
    async fn test_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArtifactStore::new(dir.path()).load("SVGNFT").await.unwrap_err();

        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn test_rejects_interfaces() {
        let err = parse_artifact("IERC721", Path::new("x.json"), r#"{ "bytecode": "0x" }"#)
            .unwrap_err();

        assert!(matches!(err, ArtifactError::EmptyBytecode { .. }));
    }

    #[test]
    fn test_rejects_corrupt_bytecode() {
        let err = parse_artifact("SVGNFT", Path::new("x.json"), r#"{ "bytecode": "0x60zz" }"#)
            .unwrap_err();

        assert!(matches!(err, ArtifactError::InvalidBytecode { name, .. } if name == "SVGNFT"));
    }

    #[test]
    fn test_rejects_unlinked_libraries() {
        let contents = r#"{ "bytecode": "0x6080__$1234567890abcdef1234567890abcdef12$__6001" }"#;
        let err = parse_artifact("Linked", Path::new("x.json"), contents).unwrap_err();

        assert!(matches!(err, ArtifactError::UnlinkedLibraries { .. }));
    }
}
