use serde::{Deserialize, Serialize};

use crate::graphics::Point;
use crate::host::Input;
use crate::net::Peer;
use crate::Firefly;

/// Raw pad value the host reports when the pad is not touched.
pub const PAD_UNTOUCHED: i32 = 0xFFFF;

/// Touchpad state: whether it is pressed and, if so, where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pad {
    pub x: i16,
    pub y: i16,
    pub touched: bool,
}

impl Pad {
    /// Decode the packed host value: x in the high 16 bits, y in the low 16.
    pub fn from_raw(raw: i32) -> Self {
        if raw == PAD_UNTOUCHED {
            return Self::default();
        }
        Self {
            x: (raw >> 16) as i16,
            y: raw as i16,
            touched: true,
        }
    }

    /// The touched position, if any.
    pub fn point(self) -> Option<Point> {
        self.touched
            .then(|| Point::new(i32::from(self.x), i32::from(self.y)))
    }
}

/// Which buttons are pressed.
///
/// Bits 0..=4 of the host value are A, B, X, Y and menu. Some hardware
/// revisions label the face buttons by direction instead; the accessors
/// [`Buttons::south`] and friends name the same bits that way.
/// The menu button is almost always handled by the runtime itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Buttons {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub menu: bool,
}

impl Buttons {
    pub fn from_raw(raw: i32) -> Self {
        Self {
            a: raw & 0b1 != 0,
            b: raw & 0b10 != 0,
            x: raw & 0b100 != 0,
            y: raw & 0b1000 != 0,
            menu: raw & 0b10000 != 0,
        }
    }

    pub fn any(self) -> bool {
        self.a || self.b || self.x || self.y || self.menu
    }

    pub fn south(self) -> bool {
        self.a
    }

    pub fn east(self) -> bool {
        self.b
    }

    pub fn west(self) -> bool {
        self.x
    }

    pub fn north(self) -> bool {
        self.y
    }
}

impl<H: Input> Firefly<H> {
    pub fn read_pad(&self, peer: Peer) -> Pad {
        Pad::from_raw(self.host().read_pad(peer.raw()))
    }

    pub fn read_buttons(&self, peer: Peer) -> Buttons {
        Buttons::from_raw(self.host().read_buttons(peer.raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::{Arg, RecordingHost};

    #[test]
    fn test_pad_untouched_sentinel() {
        assert_eq!(
            Pad::from_raw(0xFFFF),
            Pad {
                x: 0,
                y: 0,
                touched: false
            }
        );
        assert_eq!(Pad::from_raw(0xFFFF).point(), None);
    }

    #[test]
    fn test_pad_touched_position() {
        let pad = Pad::from_raw((5 << 16) | 10);
        assert_eq!(
            pad,
            Pad {
                x: 5,
                y: 10,
                touched: true
            }
        );
        assert_eq!(pad.point(), Some(Point::new(5, 10)));
    }

    #[test]
    fn test_pad_negative_coordinates() {
        let raw = ((-3i16 as u16 as i32) << 16) | (-7i16 as u16 as i32);
        let pad = Pad::from_raw(raw);
        assert_eq!((pad.x, pad.y, pad.touched), (-3, -7, true));
    }

    #[test]
    fn test_buttons_bit_decoding() {
        let b = Buttons::from_raw(0b10011);
        assert!(b.a && b.b && b.menu);
        assert!(!b.x && !b.y);
        assert!(b.south() && b.east() && !b.west() && !b.north());
        assert!(!Buttons::from_raw(0).any());
    }

    #[test]
    fn test_read_pad_forwards_peer() {
        let host = RecordingHost::new().with_return("read_pad", (1 << 16) | 2);
        let ff = Firefly::new(host);
        let pad = ff.read_pad(Peer::new(3));
        assert_eq!(pad.point(), Some(Point::new(1, 2)));
        assert_eq!(ff.host().last_call().unwrap().args, vec![Arg::I32(3)]);
    }

    #[test]
    fn test_read_buttons_combined_peer() {
        let host = RecordingHost::new().with_return("read_buttons", 0b1000);
        let ff = Firefly::new(host);
        assert!(ff.read_buttons(Peer::COMBINED).y);
        assert_eq!(ff.host().last_call().unwrap().args, vec![Arg::I32(0xFF)]);
    }
}
