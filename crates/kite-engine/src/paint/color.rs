use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color with one byte per channel.
///
/// This is the per-vertex tint format: it is what markup color literals
/// (`#rrggbbaa`) decode to and what [`Vertex`](crate::mesh::Vertex) stores.
/// Renderers that blend in premultiplied space convert with
/// [`to_premul_f32`](Self::to_premul_f32).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Premultiplied `[r, g, b, a]` in `[0, 1]`.
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }

    /// `#rrggbbaa` hex form, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from(c: [u8; 4]) -> Self {
        Self::from_array(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constants_are_opaque_primaries() {
        assert_eq!(Color::RED.to_array(), [255, 0, 0, 255]);
        assert_eq!(Color::GREEN.to_array(), [0, 255, 0, 255]);
        assert_eq!(Color::BLUE.to_array(), [0, 0, 255, 255]);
        assert!(Color::RED.is_opaque());
        assert!(!Color::TRANSPARENT.is_opaque());
    }

    #[test]
    fn premul_scales_rgb_by_alpha() {
        assert_eq!(Color::WHITE.to_premul_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::TRANSPARENT.to_premul_f32(), [0.0, 0.0, 0.0, 0.0]);
        let half = Color::rgba(255, 0, 0, 0).to_premul_f32();
        assert_eq!(half[0], 0.0);
    }

    #[test]
    fn to_hex_is_lowercase_rrggbbaa() {
        assert_eq!(Color::rgba(17, 55, 55, 255).to_hex(), "#113737ff");
    }

    #[test]
    fn layout_is_four_bytes() {
        assert_eq!(std::mem::size_of::<Color>(), 4);
        let c = Color::rgba(1, 2, 3, 4);
        let bytes: &[u8] = bytemuck::bytes_of(&c);
        assert_eq!(bytes, &[1, 2, 3, 4]);
    }
}
