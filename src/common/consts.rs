//! Static constants.

use crate::magnitude::Magnitude;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: Magnitude = Magnitude::from_word(1);
}
