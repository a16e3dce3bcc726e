pub struct Error {
    code: u16,
    line: usize,
    column: usize,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($line, $col)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($line, $col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line: 0,
            column: 0,
            message: "",
        }
    }

    /// Attach the 1-based input line and column of the offending character.
    pub fn at(&self, line: usize, column: usize) -> Error {
        debug_assert_eq!(self.line, 0);
        Error {
            code: self.code,
            line,
            column,
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line: self.line,
            column: self.column,
            message,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    /// Line and column, or `None` for errors not tied to the input text.
    pub fn location(&self) -> Option<(usize, usize)> {
        if self.line == 0 {
            None
        } else {
            Some((self.line, self.column))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 2,
    OutOfMemory = 7,
    DiskIoError = 57,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            7 => "OUT OF MEMORY",
            57 => "DISK I/O ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some((line, column)) = self.location() {
            suffix.push_str(&format!(" {}:{}", line, column));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else if self.location().is_some() {
            write!(f, "{} IN{}", code_str, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        log::error!("{}", error);
        Error::new(ErrorCode::DiskIoError)
    }
}
