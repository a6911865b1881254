// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash, for short keys such as words and
// coordinate runs.

pub struct MyHasher(u64);

impl std::hash::Hasher for MyHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline(always)]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_u8(b);
        }
    }

    #[inline(always)]
    fn write_u8(&mut self, b: u8) {
        self.0 = (std::num::Wrapping(self.0) * std::num::Wrapping(3467)).0 ^ (!b as u64);
    }

    // slot keys hash as a length prefix followed by i8 pairs.
    #[inline(always)]
    fn write_usize(&mut self, n: usize) {
        self.write_u8(n as u8);
    }
}

impl Default for MyHasher {
    fn default() -> MyHasher {
        MyHasher(0)
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;
pub type MyHashMap<K, V> = std::collections::HashMap<K, V, MyHasherDefault>;
pub type MyHashSet<T> = std::collections::HashSet<T, MyHasherDefault>;
