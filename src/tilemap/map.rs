//! Tile map generation and drawing

use macroquad::math::Vec2;
use crate::asset::{SpriteId, Sprites};
use crate::game::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Grass,
    Rock,
}

impl TileKind {
    pub fn sprite(&self) -> SpriteId {
        match self {
            TileKind::Grass => SpriteId::GrassTile,
            TileKind::Rock => SpriteId::RockTile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    /// Top-left corner in world pixels
    pub pos: Vec2,
}

/// Fixed-size grid of tiles, stored row-major
#[derive(Debug, Clone)]
pub struct TileMap {
    columns: usize,
    rows: usize,
    tile_size: Vec2,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Grass field walled in by a one-tile rock border
    pub fn generate(columns: usize, rows: usize, tile_size: Vec2) -> Self {
        let mut tiles = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for col in 0..columns {
                let border = col == 0 || row == 0 || col + 1 == columns || row + 1 == rows;
                let kind = if border { TileKind::Rock } else { TileKind::Grass };
                tiles.push(Tile {
                    kind,
                    pos: Vec2::new(col as f32 * tile_size.x, row as f32 * tile_size.y),
                });
            }
        }
        Self { columns, rows, tile_size, tiles }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Tile> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.tiles.get(row * self.columns + col)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Whole map in world pixels
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.tile_size.x,
            self.rows as f32 * self.tile_size.y,
        )
    }

    /// Tiles overlapping `view` (in world pixels)
    pub fn tiles_in<'a>(&'a self, view: &'a Rect) -> impl Iterator<Item = &'a Tile> + 'a {
        let size = self.tile_size;
        self.tiles
            .iter()
            .filter(move |t| Rect::from_pos_size(t.pos, size).intersects(view))
    }

    /// Draw the tiles visible in `view`, shifted by `-view` origin
    pub fn draw(&self, sprites: &Sprites, view: &Rect) {
        let origin = Vec2::new(view.x, view.y);
        for tile in self.tiles_in(view) {
            sprites.draw(tile.kind.sprite(), tile.pos - origin, Some(self.tile_size));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> TileMap {
        TileMap::generate(20, 20, Vec2::new(64.0, 64.0))
    }

    #[test]
    fn test_tile_positions() {
        let map = map();
        assert_eq!(map.iter().count(), 400);
        assert_eq!(map.get(3, 5).unwrap().pos, Vec2::new(192.0, 320.0));
        assert_eq!(map.pixel_size(), Vec2::new(1280.0, 1280.0));
        assert!(map.get(20, 0).is_none());
    }

    #[test]
    fn test_border_is_rock() {
        let map = map();
        for i in 0..20 {
            assert_eq!(map.get(i, 0).unwrap().kind, TileKind::Rock);
            assert_eq!(map.get(0, i).unwrap().kind, TileKind::Rock);
            assert_eq!(map.get(i, 19).unwrap().kind, TileKind::Rock);
            assert_eq!(map.get(19, i).unwrap().kind, TileKind::Rock);
        }
        assert_eq!(map.get(1, 1).unwrap().kind, TileKind::Grass);
        assert_eq!(map.get(18, 18).unwrap().kind, TileKind::Grass);

        let rock = map.iter().filter(|t| t.kind == TileKind::Rock).count();
        assert_eq!(rock, 20 * 4 - 4);
    }

    #[test]
    fn test_non_square_map() {
        let map = TileMap::generate(5, 3, Vec2::new(10.0, 20.0));
        assert_eq!((map.columns(), map.rows()), (5, 3));
        assert_eq!(map.get(4, 2).unwrap().pos, Vec2::new(40.0, 40.0));
        assert_eq!(map.get(2, 1).unwrap().kind, TileKind::Grass);
        assert_eq!(map.get(4, 1).unwrap().kind, TileKind::Rock);
    }

    #[test]
    fn test_tiles_in_view() {
        let map = map();
        // 640x480 screen at the origin covers 10x7.5 tiles
        let view = Rect::screen(640.0, 480.0);
        assert_eq!(map.tiles_in(&view).count(), 10 * 8);

        let far = Rect::new(5000.0, 5000.0, 10.0, 10.0);
        assert_eq!(map.tiles_in(&far).count(), 0);
    }
}
