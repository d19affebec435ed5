/// Trivial CPU-procedural checker texture: alternating yellow and blue
/// texels. The pixel buffer is plain RGBA floats for upload by the external
/// texture collaborator.
#[derive(Debug, Clone)]
pub struct CheckerTexture {
    width: usize,
    height: usize,
    texels: Vec<[f32; 4]>,
}

const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

impl CheckerTexture {
    pub fn new(width: usize, height: usize) -> Self {
        let mut texels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                texels.push(if (x & 1) ^ (y & 1) == 1 { YELLOW } else { BLUE });
            }
        }
        Self {
            width,
            height,
            texels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texels(&self) -> &[[f32; 4]] {
        &self.texels
    }

    pub fn texel(&self, x: usize, y: usize) -> [f32; 4] {
        self.texels[y * self.width + x]
    }
}
