use super::card::Card;
use super::hand::Hand;

/// HandIterator allows you to block certain cards and iterate over all possible hands of length n
/// n can be specified directly by From<(usize, Hand)> for HandIterator
/// it holds a compact u64 counter over the free (unblocked) cards of the deck,
/// stepped with Gosper's hack and deposited back onto the free card positions.
/// it is memory efficient because it does not store all possible hands
/// it is deterministic because it always iterates in ascending order
/// it never visits a blocked hand, so every step yields
pub struct HandIterator {
    next: Option<u64>,
    free: u64,
    base: u64,
    size: usize,
}

impl HandIterator {
    /// C(free cards, n), the exact number of hands this iterator yields in total
    pub fn combinations(&self) -> usize {
        let n = self.free.count_ones() as usize;
        let k = self.size;
        match k > n {
            true => 0,
            false => (0..k).fold(1, |x, i| x * (n - i) / (i + 1)),
        }
    }

    fn limit(&self) -> u64 {
        1 << self.free.count_ones()
    }

    fn permute(x: u64) -> u64 {
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    /// scatter the low bits of a compact counter onto the free card positions
    fn deposit(&self, mut bits: u64) -> Hand {
        let mut free = self.free;
        let mut hand = self.base;
        while bits > 0 {
            let lowest = free & free.wrapping_neg();
            if bits & 1 == 1 {
                hand |= lowest;
            }
            free ^= lowest;
            bits >>= 1;
        }
        Hand::from(hand)
    }

    fn advance(&self, x: u64) -> Option<u64> {
        match x {
            0 => None,
            x => Some(Self::permute(x)).filter(|&next| next < self.limit()),
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.next?;
        self.next = self.advance(x);
        Some(self.deposit(x))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            None => 0,
            Some(x) => {
                // hands strictly below x in counter order
                let (mut below, mut k) = (0, 0);
                for i in 0..64 {
                    if x >> i & 1 == 1 {
                        k += 1;
                        below += (0..k).fold(1, |c, j| c * (i - j) / (j + 1));
                    }
                }
                self.combinations() - below
            }
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HandIterator {}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let free = u64::from(mask.complement());
        let next = match n {
            n if n > free.count_ones() as usize => None,
            n => Some((1u64 << n) - 1),
        };
        Self {
            next,
            free,
            base: 0,
            size: n,
        }
    }
}

/// every hand of length n whose lowest card is this one.
/// the 36 shards over Card::all() partition the full enumeration
impl From<(usize, Card)> for HandIterator {
    fn from((n, lowest): (usize, Card)) -> Self {
        assert!(n > 0);
        let below = (u64::from(lowest) << 1) - 1;
        let mut this = Self::from((n - 1, Hand::from(below & Hand::mask())));
        this.base = u64::from(lowest);
        this
    }
}
