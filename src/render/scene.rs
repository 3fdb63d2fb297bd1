//! Scene pass - draws one frame of the diorama into the frame buffer
//!
//! Layering is declared, not incidental: `LAYERS` lists the entity draw
//! passes back-to-front, and the day/night and weather overlay always
//! comes last.

use rand::Rng;

use crate::cycle::{Cycle, Weather};
use crate::render::{FrameBuffer, TileAtlas};
use crate::state::GameState;
use crate::world::TILE_SIZE;

/// Background behind the world, where no tile is drawn.
const CLEAR_COLOR: [u8; 4] = [40, 44, 52, 255];

const PLANT_COLOR: [u8; 4] = [0, 128, 0, 255];
const ANIMAL_FRIENDLY_COLOR: [u8; 4] = [255, 255, 255, 255];
const ANIMAL_HOSTILE_COLOR: [u8; 4] = [255, 165, 0, 255];
const BUILDING_COLOR: [u8; 4] = [128, 128, 128, 255];
const HEALTH_BAR_BACKGROUND: [u8; 4] = [255, 0, 0, 255];
const HEALTH_BAR_FILL: [u8; 4] = [0, 255, 0, 255];

/// 30% black, blended over everything at night.
const NIGHT_TINT: [u8; 4] = [0, 0, 0, 77];
/// rgba(150, 150, 255, 0.4)
const RAIN_COLOR: [u8; 4] = [150, 150, 255, 102];
/// Streaks drawn per rainy frame.
const RAIN_STREAKS: usize = 100;

/// One draw pass. Returns how many elements it drew.
pub type LayerFn = fn(&mut FrameBuffer, &GameState, &TileAtlas) -> usize;

/// Back-to-front draw order.
pub const LAYERS: &[(&str, LayerFn)] = &[
    ("tiles", draw_tiles),
    ("plants", draw_plants),
    ("animals", draw_animals),
    ("buildings", draw_buildings),
    ("thronglets", draw_thronglets),
];

/// Draw a complete frame: clear, all layers in declared order, then the
/// overlay. Reads the state immutably; the RNG only feeds rain jitter.
pub fn draw_scene(
    frame: &mut FrameBuffer,
    state: &GameState,
    atlas: &TileAtlas,
    rng: &mut impl Rng,
) {
    frame.clear(CLEAR_COLOR);
    for (name, layer) in LAYERS {
        let drawn = layer(frame, state, atlas);
        log::trace!("Layer {}: {} drawn", name, drawn);
    }
    draw_overlay(frame, &state.cycle, rng);
}

/// Draw the visible tile window, skipping coordinates outside the grid.
pub fn draw_tiles(frame: &mut FrameBuffer, state: &GameState, atlas: &TileAtlas) -> usize {
    let range = state.camera.visible_tile_range(frame.width(), frame.height());
    let zoom = state.camera.zoom();
    let dest_size = ((TILE_SIZE as f32 * zoom).round() as i32).max(1);

    let mut drawn = 0;
    for row in range.start_row..range.end_row {
        for col in range.start_col..range.end_col {
            let Some(tile) = state.grid.tile(col, row) else {
                continue;
            };
            let screen = state.camera.world_to_screen(glam::Vec2::new(
                (col * TILE_SIZE as i32) as f32,
                (row * TILE_SIZE as i32) as f32,
            ));
            let column = tile.biome.sprite_column();
            frame.blit_scaled(
                screen.x.round() as i32,
                screen.y.round() as i32,
                dest_size,
                dest_size,
                TILE_SIZE,
                TILE_SIZE,
                |u, v| atlas.tile_pixel(column, u, v),
            );
            drawn += 1;
        }
    }
    drawn
}

pub fn draw_plants(frame: &mut FrameBuffer, state: &GameState, _atlas: &TileAtlas) -> usize {
    let zoom = state.camera.zoom();
    let size = ((4.0 * zoom).round() as i32).max(1);
    for plant in &state.registry.plants {
        let screen = state.camera.world_to_screen(plant.pos);
        frame.fill_rect(
            screen.x.round() as i32,
            screen.y.round() as i32,
            size,
            size,
            PLANT_COLOR,
        );
    }
    state.registry.plants.len()
}

pub fn draw_animals(frame: &mut FrameBuffer, state: &GameState, _atlas: &TileAtlas) -> usize {
    let zoom = state.camera.zoom();
    for animal in &state.registry.animals {
        let screen = state.camera.world_to_screen(animal.pos);
        let color = if animal.friendly {
            ANIMAL_FRIENDLY_COLOR
        } else {
            ANIMAL_HOSTILE_COLOR
        };
        frame.fill_circle(screen.x, screen.y, 4.0 * zoom, color);
    }
    state.registry.animals.len()
}

pub fn draw_buildings(frame: &mut FrameBuffer, state: &GameState, _atlas: &TileAtlas) -> usize {
    let zoom = state.camera.zoom();
    let size = ((20.0 * zoom).round() as i32).max(1);
    for building in &state.registry.buildings {
        let screen = state.camera.world_to_screen(building.pos);
        frame.fill_rect(
            screen.x.round() as i32,
            screen.y.round() as i32,
            size,
            size,
            BUILDING_COLOR,
        );
    }
    state.registry.buildings.len()
}

/// Thronglets are drawn as colored discs with a health-proportional status
/// bar floating above. The bar keeps a fixed 3px height at every zoom.
pub fn draw_thronglets(frame: &mut FrameBuffer, state: &GameState, _atlas: &TileAtlas) -> usize {
    let zoom = state.camera.zoom();
    for t in &state.registry.thronglets {
        let screen = state.camera.world_to_screen(t.pos);
        frame.fill_circle(screen.x, screen.y, 6.0 * zoom, t.color);

        let bar = state
            .camera
            .world_to_screen(t.pos + glam::Vec2::new(-8.0, -10.0));
        let bar_width = (16.0 * zoom).round() as i32;
        frame.fill_rect(
            bar.x.round() as i32,
            bar.y.round() as i32,
            bar_width,
            3,
            HEALTH_BAR_BACKGROUND,
        );
        let fill_width = (16.0 * t.health_fraction() * zoom).round() as i32;
        frame.fill_rect(
            bar.x.round() as i32,
            bar.y.round() as i32,
            fill_width,
            3,
            HEALTH_BAR_FILL,
        );
    }
    state.registry.thronglets.len()
}

/// Night tint and rain streaks, after every entity layer.
pub fn draw_overlay(frame: &mut FrameBuffer, cycle: &Cycle, rng: &mut impl Rng) {
    if !cycle.is_day {
        frame.blend_fill(NIGHT_TINT);
    }
    if cycle.weather == Weather::Rain {
        for _ in 0..RAIN_STREAKS {
            let x = rng.random_range(0.0..frame.width() as f32);
            let y = rng.random_range(0.0..frame.height() as f32);
            frame.blend_line(x, y, x + 1.0, y + 8.0, RAIN_COLOR);
        }
    }
}
