//! Self-extracting batch script template
//!
//! The rendered script carries its payload after the last command, between
//! two sentinel lines. At run time it:
//!
//! 1. Removes the scratch files of a previous run
//! 2. Copies the text between the sentinels into `%TEMP%\<payload file>` (PowerShell)
//! 3. Decodes it into `%TEMP%\<base>.exe` (certutil)
//! 4. Checks the decode status and the output file, then starts the program detached
//!
//! Every stage echoes a status line; failures `exit /b 1`.
//!
//! Names are made safe before substitution: the base name loses quotes and
//! control characters, the payload file name is reduced to `[A-Za-z0-9._-]`.

use crate::config::{Exe2BatConfig, LineEnding};
use crate::payload::Payload;
use std::borrow::Cow;

/// Line opening the embedded payload
pub const PAYLOAD_BEGIN: &str = "-----BEGIN PAYLOAD-----";

/// Line closing the embedded payload
pub const PAYLOAD_END: &str = "-----END PAYLOAD-----";

const BASE: &str = "{base}";
const PAYLOAD_FILE: &str = "{payload_file}";

// The PowerShell line builds the sentinel strings by concatenation so the
// markers occur only once in the script text.
const BODY: &[&str] = &[
    "@echo off",
    "setlocal",
    "",
    ":: Auto-generated EXE-embedded batch",
    ":: Reconstructs and runs {base}.exe",
    "",
    r#"set "outExe=%TEMP%\{base}.exe""#,
    r#"set "b64file=%TEMP%\{payload_file}""#,
    "",
    ":: Clean up files left by a previous run",
    r#"if exist "%b64file%" del "%b64file%""#,
    r#"if exist "%outExe%" del "%outExe%""#,
    "",
    r#"echo Extracting payload to "%b64file%"..."#,
    concat!(
        r#"powershell -NoProfile -Command ""#,
        r"$lines = @(Get-Content -LiteralPath '%~f0'); ",
        r"$start = $lines.IndexOf('-----BEGIN' + ' PAYLOAD-----') + 1; ",
        r"$end = $lines.IndexOf('-----END' + ' PAYLOAD-----'); ",
        r"if ($start -gt 0 -and $end -gt $start) { $payload = [string[]]$lines[$start..($end-1)] } else { $payload = [string[]]@() }; ",
        r"[IO.File]::WriteAllLines('%b64file%', $payload)",
        r#"""#,
    ),
    "",
    r#"if exist "%b64file%" ("#,
    "  echo Payload extracted successfully",
    r#"  for %%i in ("%b64file%") do echo Payload size: %%~zi bytes"#,
    ") else (",
    "  echo ERROR: Payload extraction failed",
    "  exit /b 1",
    ")",
    "",
    "echo Decoding using certutil...",
    r#"certutil -decode "%b64file%" "%outExe%" >nul"#,
    "",
    "if %errorlevel% neq 0 (",
    "  echo ERROR: Certutil failed with error code %errorlevel%",
    "  echo Checking payload content...",
    r#"  type "%b64file%" | find /C "TV" >nul"#,
    "  if errorlevel 1 (",
    "    echo ERROR: Payload does not appear to be valid base64",
    "  ) else (",
    "    echo Payload appears to be base64 but certutil failed",
    "  )",
    "  exit /b 1",
    ")",
    "echo Certutil decoding successful",
    "",
    r#"if not exist "%outExe%" ("#,
    "  echo ERROR: reconstruction failed.",
    "  exit /b 1",
    ")",
    "",
    r#"echo Running "%outExe%"..."#,
    r#"start "" "%outExe%""#,
    "",
    "exit /b 0",
    "",
];

/// Renders the batch wrapper around a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTemplate {
    payload_file_name: String,
    line_ending: LineEnding,
}

impl ScriptTemplate {
    /// Create template with explicit settings
    ///
    /// Characters of `payload_file_name` outside `[A-Za-z0-9._-]` become `_`.
    #[inline]
    #[must_use]
    pub fn new(payload_file_name: impl Into<String>, line_ending: LineEnding) -> Self {
        Self {
            payload_file_name: sanitize_file_name(&payload_file_name.into()),
            line_ending,
        }
    }

    /// Create template from handler configuration
    #[inline]
    #[must_use]
    pub fn from_config(config: &Exe2BatConfig) -> Self {
        Self::new(config.payload_file_name.clone(), config.line_ending)
    }

    /// Render the script for `base` (the executable name without extension)
    ///
    /// An empty payload leaves the two sentinel lines adjacent.
    #[must_use]
    pub fn render(&self, base: &str, payload: &Payload) -> String {
        let eol = self.line_ending.as_str();
        let base = escape_name(base);
        let payload_file = &self.payload_file_name;

        let mut script = String::with_capacity(payload.len() + 2048);
        for line in BODY {
            script.push_str(&line.replace(BASE, &base).replace(PAYLOAD_FILE, payload_file));
            script.push_str(eol);
        }

        script.push_str(PAYLOAD_BEGIN);
        script.push_str(eol);
        if !payload.is_empty() {
            script.push_str(payload.as_str());
            script.push_str(eol);
        }
        script.push_str(PAYLOAD_END);
        script
    }
}

impl Default for ScriptTemplate {
    fn default() -> Self {
        Self::from_config(&Exe2BatConfig::default())
    }
}

/// Make a name safe to embed in the script
///
/// `"` and control characters become `_`; `%` is doubled so cmd.exe does
/// not expand it as a variable.
#[must_use]
pub fn escape_name(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c == '"' || c == '%' || c.is_control()) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        match ch {
            '%' => escaped.push_str("%%"),
            '"' => escaped.push('_'),
            c if c.is_control() => escaped.push('_'),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Read the payload text back out of a rendered script
///
/// Returns `None` when either sentinel line is missing.
#[must_use]
pub fn extract_payload(script: &str) -> Option<String> {
    let mut lines = script.lines().skip_while(|line| *line != PAYLOAD_BEGIN);
    lines.next()?;

    let mut payload = String::new();
    for line in lines {
        if line == PAYLOAD_END {
            return Some(payload);
        }
        payload.push_str(line);
    }
    None
}
