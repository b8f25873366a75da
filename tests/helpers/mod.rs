#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use joi::config::{GenerationConfig, JoiConfig};
use joi::generation::{Assistant, OllamaClient, DEFAULT_PERSONA};
use joi::retrieval::RetrievalService;
use joi::server::AppState;
use tempfile::TempDir;

/// Retrieval service over the built-in profile with default settings.
pub fn builtin_service() -> RetrievalService {
    RetrievalService::builtin()
}

/// A small knowledge base about a different person, in TOML.
pub const ADA_TOML: &str = r#"
[personal]
name = "Ada Lovelace"
title = "Analyst of the Analytical Engine"
specialties = ["Mathematics", "Algorithms"]
description = "Wrote the first published program"

[personal.links]
linkedin = "https://www.linkedin.com/in/ada/"
codepen = "https://codepen.io/ada"
github = "https://github.com/ada"

[[skills]]
key = "pureMathematics"
items = ["Bernoulli numbers", "Calculus"]

[[certifications]]
title = "Mathematics Tutoring"
issuer = "Augustus De Morgan"
date = "Jan 1841"
credential_id = "ADM-1841"
verification_url = "https://example.com/adm-1841"

[[projects]]
id = 1
title = "Note G"
description = "An algorithm for computing Bernoulli numbers on the Analytical Engine"
technologies = ["Punched cards"]
status = "published"
category = "algorithms"
highlights = ["First published program"]

[experience]
summary = "Ada translated and annotated Menabrea's memoir on the Analytical Engine."
expertise = ["Annotation", "Program design"]
"#;

/// Write `contents` to `name` inside a fresh temp dir. Keep the dir alive while using the path.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Generation settings pointing at `host` (usually a wiremock server).
pub fn generation_config(host: &str) -> GenerationConfig {
    GenerationConfig {
        host: host.to_string(),
        timeout_secs: 5,
        ..GenerationConfig::default()
    }
}

/// Built-in retrieval + an assistant talking to `host`.
pub fn app_state(host: &str) -> AppState {
    let mut config = JoiConfig::default();
    config.generation = generation_config(host);
    AppState::from_config(&config).unwrap()
}

pub fn assistant(host: &str) -> Assistant {
    let client = OllamaClient::new(&generation_config(host)).unwrap();
    Assistant::new(
        Arc::new(RetrievalService::builtin()),
        client,
        DEFAULT_PERSONA.to_string(),
    )
}
