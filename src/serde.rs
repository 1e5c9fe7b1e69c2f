use core::fmt;

use serde_core::{
  de::{SeqAccess, Visitor},
  Deserialize, Deserializer, Serialize, Serializer,
};

use super::BlockDeque;

impl Serialize for BlockDeque {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_seq((0..self.len()).map(|index| &self[index]))
  }
}

impl<'de> Deserialize<'de> for BlockDeque {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct SeqVisitor;

    impl<'de> Visitor<'de> for SeqVisitor {
      type Value = BlockDeque;

      fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
      where
        A: SeqAccess<'de>,
      {
        // The deque grows as needed, so any sequence length is accepted.
        let mut deque = BlockDeque::new();
        while let Some(value) = seq.next_element()? {
          deque.push_back(value);
        }
        Ok(deque)
      }
    }

    deserializer.deserialize_seq(SeqVisitor)
  }
}
