//! Knowledge-grounded assistant backend.
//!
//! Joi answers questions about one person from a static knowledge base and relays
//! chat messages to a locally hosted LLM with the retrieved facts as context. It
//! is the retrieval core behind a voice/avatar front end: the UI sends text in,
//! and gets answer or reply text back to speak and display.
//!
//! | Intent | Routed by | Returns |
//! |--------|-----------|---------|
//! | **Skills** | `skill`, `technology`, `programming` | Skill groups, narrowed by area |
//! | **Projects** | `project`, `work`, `built` | Projects, narrowed to RAG or chatbot |
//! | **Certifications** | `certification`, `education`, `course` | All certifications |
//! | **Experience** | `experience`, `background`, `about` | Personal + experience |
//! | **Contact** | `contact`, `reach`, `linkedin` | Profile links |
//! | **Search** | anything else | Ranked keyword matches |
//!
//! # Architecture
//!
//! - **Knowledge**: built-in profile, or a TOML/JSON file with the same shape
//! - **Index**: in-memory inverted index, token → chunks, built once at startup
//! - **Ranking**: number of distinct query keywords per chunk
//! - **Generation**: non-streaming `POST /api/generate` against Ollama
//! - **Transport**: MCP over stdio, or an HTTP JSON API with MCP nested at `/mcp`
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`knowledge`] — Knowledge base records, built-in profile, and chunking
//! - [`retrieval`] — Keyword index, intent routing, and templated answers
//! - [`generation`] — Prompt building and the Ollama client
//! - [`server`] — MCP and HTTP entry points

pub mod config;
pub mod generation;
pub mod knowledge;
pub mod retrieval;
pub mod server;
pub mod tools;
