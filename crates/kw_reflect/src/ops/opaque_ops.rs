use crate::Reflect;

/// A leaf value that is serialized as a whole.
///
/// Usually implemented through [`impl_reflect_opaque!`](crate::impl_reflect_opaque)
/// for types that already implement `serde`'s traits.
pub trait Opaque: Reflect {
    fn as_serialize(&self) -> &dyn erased_serde::Serialize;

    /// Replaces `self` with a value read from `deserializer`.
    fn deserialize_in_place(
        &mut self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<(), erased_serde::Error>;
}
