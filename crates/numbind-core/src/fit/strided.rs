use crate::error::{InvalidArgument, NumResult};

/// A borrowed view selecting every `stride`-th element of a slice.
///
/// Logical element `i` is `data[i * stride]`, so a 10-element buffer with
/// stride 3 has logical length 4.
#[derive(Debug, Clone, Copy)]
pub struct Strided<'a> {
    data: &'a [f64],
    stride: usize,
}

impl<'a> Strided<'a> {
    /// `name` is only used in the error when the view is rejected.
    pub fn new(name: &'static str, data: &'a [f64], stride: usize) -> NumResult<Self> {
        if stride == 0 {
            return Err(InvalidArgument::ZeroStride { name }.into());
        }
        if data.is_empty() {
            return Err(InvalidArgument::Empty { name }.into());
        }
        Ok(Self { data, stride })
    }

    pub fn len(&self) -> usize {
        self.data.len().div_ceil(self.stride)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + 'a {
        let data = self.data;
        data.iter().step_by(self.stride).copied()
    }
}

/// Views must agree on logical length before they are handed to a provider
pub(crate) fn ensure_same_len(
    a: (&'static str, &Strided<'_>),
    b: (&'static str, &Strided<'_>),
) -> NumResult<()> {
    let (len_a, len_b) = (a.1.len(), b.1.len());
    if len_a != len_b {
        return Err(InvalidArgument::LengthMismatch { a: a.0, b: b.0, len_a, len_b }.into());
    }
    Ok(())
}
