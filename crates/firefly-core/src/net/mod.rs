use serde::{Deserialize, Serialize};

use crate::host::Misc;
use crate::Firefly;

/// Width of the online bitmap; peer ids run from 0 to 31.
pub const MAX_PEERS: i32 = 32;

/// The id of a device in a multiplayer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Peer(i32);

impl Peer {
    /// All peers at once. Input read for this peer combines every device.
    pub const COMBINED: Peer = Peer(0xFF);

    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// Bitmap of the peers currently online: bit `i` is set when peer `i` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Peers {
    pub online: u32,
}

impl Peers {
    pub fn is_online(self, peer: Peer) -> bool {
        u32::try_from(peer.raw())
            .ok()
            .and_then(|shift| self.online.checked_shr(shift))
            .map(|bits| bits & 1 != 0)
            .unwrap_or(false)
    }

    /// Online peers in ascending id order.
    pub fn iter(self) -> impl Iterator<Item = Peer> {
        (0..MAX_PEERS)
            .map(Peer::new)
            .filter(move |p| self.is_online(*p))
    }

    pub fn len(self) -> usize {
        self.online.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.online == 0
    }
}

/// Check whether `peer` is online in `peers`.
pub fn is_online(peers: Peers, peer: Peer) -> bool {
    peers.is_online(peer)
}

impl<H: Misc> Firefly<H> {
    /// The peer this device plays as.
    pub fn get_me(&self) -> Peer {
        Peer::new(self.host().get_me())
    }

    pub fn get_peers(&self) -> Peers {
        Peers {
            online: self.host().get_peers() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::RecordingHost;

    #[test]
    fn test_is_online_bit_test() {
        let peers = Peers { online: 0b1010 };
        assert!(is_online(peers, Peer::new(1)));
        assert!(is_online(peers, Peer::new(3)));
        assert!(!is_online(peers, Peer::new(0)));
        assert!(!is_online(peers, Peer::new(2)));
    }

    #[test]
    fn test_is_online_out_of_range() {
        let peers = Peers { online: u32::MAX };
        assert!(peers.is_online(Peer::new(31)));
        assert!(!peers.is_online(Peer::new(32)));
        assert!(!peers.is_online(Peer::COMBINED));
        assert!(!peers.is_online(Peer::new(-1)));
    }

    #[test]
    fn test_iter_online_peers() {
        let peers = Peers { online: 0b1000_0101 };
        let ids: Vec<i32> = peers.iter().map(Peer::raw).collect();
        assert_eq!(ids, vec![0, 2, 7]);
        assert_eq!(peers.len(), 3);
        assert!(Peers::default().is_empty());
    }

    #[test]
    fn test_get_me_and_peers() {
        let host = RecordingHost::new()
            .with_return("get_me", 2)
            .with_return("get_peers", 0b111);
        let ff = Firefly::new(host);
        let me = ff.get_me();
        assert_eq!(me, Peer::new(2));
        assert!(ff.get_peers().is_online(me));
    }
}
