use std::fmt;

/// Status codes returned by the numerical provider.
///
/// The numbering follows the C-level convention of the library the facades
/// were first written against: zero is success, a few negative values are
/// reserved for iteration control, and positive values name failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
    Continue,
    Dom,
    Range,
    Fault,
    Inval,
    Failed,
    Factor,
    Sanity,
    NoMem,
    BadFunc,
    Runaway,
    MaxIter,
    ZeroDiv,
    BadTol,
    Tol,
    Undrflw,
    Ovrflw,
    Loss,
    Round,
    BadLen,
    NotSqr,
    Sing,
    Diverge,
    Unsup,
    Unimpl,
    Cache,
    Table,
    NoProg,
    NoProgJ,
    TolF,
    TolX,
    TolG,
    Eof,
}

/// Message for codes outside the known table.
pub const UNKNOWN_CODE_MESSAGE: &str = "unknown error code";

impl Status {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = -1;
    pub const CONTINUE: i32 = -2;
    pub const EDOM: i32 = 1;
    pub const ERANGE: i32 = 2;
    pub const EFAULT: i32 = 3;
    pub const EINVAL: i32 = 4;
    pub const EFAILED: i32 = 5;
    pub const EFACTOR: i32 = 6;
    pub const ESANITY: i32 = 7;
    pub const ENOMEM: i32 = 8;
    pub const EBADFUNC: i32 = 9;
    pub const ERUNAWAY: i32 = 10;
    pub const EMAXITER: i32 = 11;
    pub const EZERODIV: i32 = 12;
    pub const EBADTOL: i32 = 13;
    pub const ETOL: i32 = 14;
    pub const EUNDRFLW: i32 = 15;
    pub const EOVRFLW: i32 = 16;
    pub const ELOSS: i32 = 17;
    pub const EROUND: i32 = 18;
    pub const EBADLEN: i32 = 19;
    pub const ENOTSQR: i32 = 20;
    pub const ESING: i32 = 21;
    pub const EDIVERGE: i32 = 22;
    pub const EUNSUP: i32 = 23;
    pub const EUNIMPL: i32 = 24;
    pub const ECACHE: i32 = 25;
    pub const ETABLE: i32 = 26;
    pub const ENOPROG: i32 = 27;
    pub const ENOPROGJ: i32 = 28;
    pub const ETOLF: i32 = 29;
    pub const ETOLX: i32 = 30;
    pub const ETOLG: i32 = 31;
    pub const EOF: i32 = 32;

    const ALL: [Status; 35] = [
        Status::Success,
        Status::Failure,
        Status::Continue,
        Status::Dom,
        Status::Range,
        Status::Fault,
        Status::Inval,
        Status::Failed,
        Status::Factor,
        Status::Sanity,
        Status::NoMem,
        Status::BadFunc,
        Status::Runaway,
        Status::MaxIter,
        Status::ZeroDiv,
        Status::BadTol,
        Status::Tol,
        Status::Undrflw,
        Status::Ovrflw,
        Status::Loss,
        Status::Round,
        Status::BadLen,
        Status::NotSqr,
        Status::Sing,
        Status::Diverge,
        Status::Unsup,
        Status::Unimpl,
        Status::Cache,
        Status::Table,
        Status::NoProg,
        Status::NoProgJ,
        Status::TolF,
        Status::TolX,
        Status::TolG,
        Status::Eof,
    ];

    /// Raw integer value of the status
    pub fn code(&self) -> i32 {
        match self {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::FAILURE,
            Status::Continue => Self::CONTINUE,
            Status::Dom => Self::EDOM,
            Status::Range => Self::ERANGE,
            Status::Fault => Self::EFAULT,
            Status::Inval => Self::EINVAL,
            Status::Failed => Self::EFAILED,
            Status::Factor => Self::EFACTOR,
            Status::Sanity => Self::ESANITY,
            Status::NoMem => Self::ENOMEM,
            Status::BadFunc => Self::EBADFUNC,
            Status::Runaway => Self::ERUNAWAY,
            Status::MaxIter => Self::EMAXITER,
            Status::ZeroDiv => Self::EZERODIV,
            Status::BadTol => Self::EBADTOL,
            Status::Tol => Self::ETOL,
            Status::Undrflw => Self::EUNDRFLW,
            Status::Ovrflw => Self::EOVRFLW,
            Status::Loss => Self::ELOSS,
            Status::Round => Self::EROUND,
            Status::BadLen => Self::EBADLEN,
            Status::NotSqr => Self::ENOTSQR,
            Status::Sing => Self::ESING,
            Status::Diverge => Self::EDIVERGE,
            Status::Unsup => Self::EUNSUP,
            Status::Unimpl => Self::EUNIMPL,
            Status::Cache => Self::ECACHE,
            Status::Table => Self::ETABLE,
            Status::NoProg => Self::ENOPROG,
            Status::NoProgJ => Self::ENOPROGJ,
            Status::TolF => Self::ETOLF,
            Status::TolX => Self::ETOLX,
            Status::TolG => Self::ETOLG,
            Status::Eof => Self::EOF,
        }
    }

    /// Look up the named status for a raw code
    pub fn from_code(code: i32) -> Option<Status> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
            Status::Continue => "the iteration has not converged yet",
            Status::Dom => "input domain error",
            Status::Range => "output range error",
            Status::Fault => "invalid pointer",
            Status::Inval => "invalid argument supplied by user",
            Status::Failed => "generic failure",
            Status::Factor => "factorization failed",
            Status::Sanity => "sanity check failed - shouldn't happen",
            Status::NoMem => "malloc failed",
            Status::BadFunc => "problem with user-supplied function",
            Status::Runaway => "iterative process is out of control",
            Status::MaxIter => "exceeded max number of iterations",
            Status::ZeroDiv => "tried to divide by zero",
            Status::BadTol => "specified tolerance is invalid or theoretically unattainable",
            Status::Tol => "failed to reach the specified tolerance",
            Status::Undrflw => "underflow",
            Status::Ovrflw => "overflow",
            Status::Loss => "loss of accuracy",
            Status::Round => "roundoff error",
            Status::BadLen => "matrix/vector sizes are not conformant",
            Status::NotSqr => "matrix not square",
            Status::Sing => "singularity or extremely bad function evaluation detected",
            Status::Diverge => "integral or series is divergent",
            Status::Unsup => "the required feature is not supported by this hardware platform",
            Status::Unimpl => "the requested feature is not (yet) implemented",
            Status::Cache => "cache limit exceeded",
            Status::Table => "table limit exceeded",
            Status::NoProg => "iteration is not making progress towards solution",
            Status::NoProgJ => "jacobian evaluations are not improving the solution",
            Status::TolF => "cannot reach the specified tolerance in F",
            Status::TolX => "cannot reach the specified tolerance in X",
            Status::TolG => "cannot reach the specified tolerance in gradient",
            Status::Eof => "end of file",
        }
    }
}

/// Message lookup for any raw code, known or not
pub fn strerror(code: i32) -> &'static str {
    Status::from_code(code).map_or(UNKNOWN_CODE_MESSAGE, |status| status.message())
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
