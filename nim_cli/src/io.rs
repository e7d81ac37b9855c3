use std::{
    fs::File,
    io::{self, Stdout, stdout},
};

#[derive(Debug, Clone)]
pub enum FileOrStdout {
    FilePath(String),
    FileOrStdout,
}

impl ::core::fmt::Display for FileOrStdout {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            Self::FileOrStdout => write!(f, "-"),
            Self::FilePath(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for FileOrStdout {
    fn from(value: String) -> Self {
        if &value == "-" {
            Self::FileOrStdout
        } else {
            Self::FilePath(value)
        }
    }
}

impl FileOrStdout {
    pub fn create(&self) -> io::Result<FileOrStdoutWriter> {
        match self {
            Self::FilePath(fp) => Ok(FileOrStdoutWriter::File(File::create(fp)?)),
            Self::FileOrStdout => Ok(FileOrStdoutWriter::FileOrStdout(stdout())),
        }
    }
}

pub enum FileOrStdoutWriter {
    File(File),
    FileOrStdout(Stdout),
}

impl io::Write for FileOrStdoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.write(buf),
            Self::FileOrStdout(fd) => {
                let mut lock = fd.lock();
                lock.write(buf)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(f) => f.flush(),
            Self::FileOrStdout(fd) => {
                let mut lock = fd.lock();
                lock.flush()
            }
        }
    }
}
