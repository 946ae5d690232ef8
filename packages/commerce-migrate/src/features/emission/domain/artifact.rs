//! Generated artifacts

use serde::Serialize;
use std::fmt;

/// Output file kinds, in write order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Controller,
    Facade,
    Service,
    Config,
    BulkLoad,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Controller,
        ArtifactKind::Facade,
        ArtifactKind::Service,
        ArtifactKind::Config,
        ArtifactKind::BulkLoad,
    ];

    pub fn file_name(&self, class_name: &str) -> String {
        match self {
            ArtifactKind::Controller => format!("{class_name}Controller.java"),
            ArtifactKind::Facade => format!("{class_name}Facade.java"),
            ArtifactKind::Service => format!("{class_name}Service.java"),
            ArtifactKind::Config => format!("{class_name}Config.java"),
            ArtifactKind::BulkLoad => format!("{class_name}.impex"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Facade => "facade",
            ArtifactKind::Service => "service",
            ArtifactKind::Config => "config",
            ArtifactKind::BulkLoad => "bulk_load",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file to materialize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub content: String,
}

/// Every text generated for one class
///
/// Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionBundle {
    pub class_name: String,
    pub controller: String,
    pub facade: Option<String>,
    pub service: String,
    pub dto: String,
    pub response: String,
    pub wiring: String,
    pub bulk_load: String,
}

impl EmissionBundle {
    /// Response object, DTO and wiring, separated by blank lines
    pub fn config(&self) -> String {
        format!("{}\n{}\n{}", self.response, self.dto, self.wiring)
    }

    pub fn has_facade(&self) -> bool {
        self.facade.is_some()
    }

    /// Files to write, in fixed order
    ///
    /// The bulk-load script is only listed when requested.
    pub fn artifacts(&self, include_bulk_load: bool) -> Vec<Artifact> {
        let mut artifacts = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            let content = match kind {
                ArtifactKind::Controller => Some(self.controller.clone()),
                ArtifactKind::Facade => self.facade.clone(),
                ArtifactKind::Service => Some(self.service.clone()),
                ArtifactKind::Config => Some(self.config()),
                ArtifactKind::BulkLoad => include_bulk_load.then(|| self.bulk_load.clone()),
            };
            if let Some(content) = content {
                artifacts.push(Artifact {
                    kind,
                    file_name: kind.file_name(&self.class_name),
                    content,
                });
            }
        }
        artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(facade: Option<&str>) -> EmissionBundle {
        EmissionBundle {
            class_name: "PlainCmd".into(),
            controller: "C\n".into(),
            facade: facade.map(String::from),
            service: "S\n".into(),
            dto: "D\n".into(),
            response: "R\n".into(),
            wiring: "W\n".into(),
            bulk_load: "B\n".into(),
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ArtifactKind::Controller.file_name("X"), "XController.java");
        assert_eq!(ArtifactKind::Config.file_name("X"), "XConfig.java");
        assert_eq!(ArtifactKind::BulkLoad.file_name("X"), "X.impex");
    }

    #[test]
    fn test_config_concatenation() {
        assert_eq!(bundle(None).config(), "R\n\nD\n\nW\n");
    }

    #[test]
    fn test_artifacts_without_facade() {
        let kinds: Vec<_> = bundle(None).artifacts(false).iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![ArtifactKind::Controller, ArtifactKind::Service, ArtifactKind::Config]
        );
    }

    #[test]
    fn test_artifacts_full_order() {
        let names: Vec<_> = bundle(Some("F\n"))
            .artifacts(true)
            .into_iter()
            .map(|a| a.file_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "PlainCmdController.java",
                "PlainCmdFacade.java",
                "PlainCmdService.java",
                "PlainCmdConfig.java",
                "PlainCmd.impex",
            ]
        );
    }
}
