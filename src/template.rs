//! The built-in README template for the sage project.
//!
//! The template never contains a literal code fence: every fence is
//! written as the `{{CODE}}` placeholder and substituted at render time,
//! so Markdown tooling never mistakes the embedded samples for the
//! document's own structure.

use crate::constants::CODE_FENCE;
use serde_json::json;

/// Render context binding the placeholder to the literal fence delimiter.
pub fn context() -> serde_json::Value {
    json!({ "CODE": CODE_FENCE })
}

/// The README document template. `{{CODE}}` marks every code fence.
pub const README_TEMPLATE: &str = r#"# sage

sage is a GenAI-powered Rust source code summarizer and crate recreator.
It analyzes a Rust source file and produces a concise summary covering the
file's main functionality, the crates it pulls in, a safety verdict, and
any file operations it performs. It can also generate scripts that
recreate a crate from a given source folder.

Current release: <code>0.1.4</code>

---

## Features

- **Source code analysis:**
  - Summarizes the primary functionality of a Rust source file.
  - Identifies which crates the code uses.
  - Assesses safety with a `SAFE_TO_RUN: YES/NO` verdict and explanation.
  - Detects file operations and reports a `FILE_OPERATIONS: YES/NO`
    verdict with details.

- **Interactive follow-up mode:**
  - Ask follow-up questions about the analysis from an interactive prompt.
  - Or pass a single follow-up question on the command line.

- **Output flexibility:**
  - Streaming or non-streaming output for the generated summary.

- **Crate recreation:**
  - Generates a Rust or Python script that recreates the crate structure
    from a source folder.
  - Optionally limits processing to the `src` subfolder.

---

## Usage

- **Summarize a Rust source file:**

  {{CODE}}bash
  cargo run -- path/to/source_file.rs
  {{CODE}}

- **Interactive follow-up mode:**

  {{CODE}}bash
  cargo run -- path/to/source_file.rs --stdin
  {{CODE}}

- **Single follow-up question:**

  {{CODE}}bash
  cargo run -- path/to/source_file.rs -q "Does this code handle errors properly?"
  {{CODE}}

- **Streaming output:**

  {{CODE}}bash
  cargo run -- path/to/source_file.rs --streaming
  {{CODE}}

- **Generate a crate recreation script:**

  {{CODE}}bash
  cargo run -- path/to/source_folder --recreate-crate-rs [--src-only]
  {{CODE}}

If no file is given, sage analyzes its own source code as a demonstration.

### Programmatic usage

{{CODE}}rust
use sage::summarizer::{self, ChatSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (summary, mut session) =
        summarizer::summarize_source_session(Some("path/to/source_file.rs"), true).await?;
    println!("Summary:\n{}", summary);

    let followup = session.ask("Can you elaborate on the error handling?").await?;
    println!("Follow-up answer:\n{}", followup);

    Ok(())
}
{{CODE}}

---

## How it works

1. **Input** - reads the given Rust source file, or falls back to its own
   source when none is provided.
2. **Prompt construction** - builds a prompt asking for the code's main
   functionality, used crates, safety, and file operations.
3. **Model session** - sends the prompt to a GenAI model and collects the
   response, streaming or not.
4. **Follow-up** - keeps the session open for interactive or one-shot
   follow-up questions.
5. **Crate recreation** - when requested, emits a Rust or Python script
   that rebuilds the crate layout from the source folder.

---

## Dependencies

- [Tokio](https://tokio.rs/) - asynchronous runtime.
- [clap](https://github.com/clap-rs/clap) - command-line argument parsing.
- [rustyline](https://github.com/kkawakam/rustyline) - interactive line
  editing.
- [log](https://docs.rs/log) and [env_logger](https://docs.rs/env_logger) -
  logging.
- A GenAI client library performing the actual model calls.

---

## License

Distributed under the MIT License. See LICENSE for details.
"#;
