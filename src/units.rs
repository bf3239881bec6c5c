#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Dimension(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct BombCount(pub usize);
