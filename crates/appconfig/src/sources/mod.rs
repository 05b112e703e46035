//! Raw value sources
//!
//! Each reader turns one external input into a map keyed by parameter name:
//!
//! - [`cli`] - process arguments (`-name` / `-name=value`)
//! - [`env`] - environment variables named exactly like the parameter
//! - [`document`] - a JSON object read from a file or standard input
//!
//! The inputs themselves are supplied through [`Inputs`], so resolution never
//! touches global process state unless [`Inputs::from_process`] is used.

pub mod cli;
pub mod document;
pub mod env;

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Key to raw string value, as produced by the command line or environment
pub type RawSourceMap = HashMap<String, String>;

/// Lookup of environment variables by exact name
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Opens configuration documents by path
pub trait DocumentOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;
}

impl<O: DocumentOpener + ?Sized> DocumentOpener for &O {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }
}

/// Opens documents from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl DocumentOpener for FsOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(path)?))
    }
}

/// External collaborators consumed by one resolution pass
pub struct Inputs<'a> {
    pub(crate) args: Vec<String>,
    pub(crate) env: Box<dyn Environment + 'a>,
    pub(crate) opener: Box<dyn DocumentOpener + 'a>,
    pub(crate) stdin: Option<Box<dyn Read + 'a>>,
}

impl<'a> Inputs<'a> {
    /// Arguments only: empty environment, filesystem documents, no stdin.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            env: Box::new(HashMap::<String, String>::new()),
            opener: Box::new(FsOpener),
            stdin: None,
        }
    }

    /// Wire the real process: arguments without the program name, the
    /// environment, the filesystem and standard input.
    ///
    /// Arguments that are not valid Unicode are converted lossily, so they
    /// never match a declared switch and surface as unrecognized.
    pub fn from_process() -> Inputs<'static> {
        Inputs::new(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
            .env(ProcessEnv)
            .stdin(io::stdin())
    }

    pub fn env(mut self, env: impl Environment + 'a) -> Self {
        self.env = Box::new(env);
        self
    }

    pub fn opener(mut self, opener: impl DocumentOpener + 'a) -> Self {
        self.opener = Box::new(opener);
        self
    }

    /// Reader consulted only when the stdin document flag resolves true.
    pub fn stdin(mut self, reader: impl Read + 'a) -> Self {
        self.stdin = Some(Box::new(reader));
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Debug for Inputs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inputs")
            .field("args", &self.args)
            .field("stdin", &self.stdin.is_some())
            .finish_non_exhaustive()
    }
}
