//! Ticket id generation.
//!
//! Ids are short digit strings meant to be typed in at an exit terminal.
//! They are not secret and collisions are possible; the desk checks the
//! store before using one.

use rand::Rng;

/// Source of candidate ticket ids.
pub trait TicketIdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Uniformly random decimal digits. Not cryptographically secure.
#[derive(Debug, Clone, Copy)]
pub struct RandomDigits {
    length: usize,
}

impl RandomDigits {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl TicketIdSource for RandomDigits {
    fn next_id(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}

/// Hands out a fixed list of ids, then repeats the last one.
#[cfg(test)]
pub struct ScriptedIds {
    ids: std::sync::Mutex<std::collections::VecDeque<String>>,
}

#[cfg(test)]
impl ScriptedIds {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: std::sync::Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
        }
    }
}

#[cfg(test)]
impl TicketIdSource for ScriptedIds {
    fn next_id(&self) -> String {
        let mut ids = self.ids.lock().unwrap();
        if ids.len() > 1 {
            ids.pop_front().unwrap()
        } else {
            ids.front().cloned().unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_digits_shape() {
        let source = RandomDigits::new(6);
        for _ in 0..200 {
            let id = source.next_id();
            assert_eq!(id.len(), 6);
            assert!(id.chars().all(|c| c.is_ascii_digit()), "bad id {id}");
        }
    }

    #[test]
    fn test_random_digits_vary() {
        let source = RandomDigits::new(6);
        let ids: std::collections::HashSet<String> = (0..50).map(|_| source.next_id()).collect();
        // 50 draws from a million ids colliding down to a handful would mean a broken rng
        assert!(ids.len() > 40);
    }

    #[test]
    fn test_scripted_ids_repeat_last() {
        let source = ScriptedIds::new(&["111111", "222222"]);
        assert_eq!(source.next_id(), "111111");
        assert_eq!(source.next_id(), "222222");
        assert_eq!(source.next_id(), "222222");
    }
}
