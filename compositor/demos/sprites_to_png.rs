use flo_compositor::*;

use std::fs::{File};

///
/// Creates a checkerboard sprite with 8x8 pixel squares
///
fn checkerboard(width: u32, height: u32) -> Vec<u8> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            if ((x / 8) + (y / 8)) % 2 == 0 {
                [240, 240, 240, 255]
            } else {
                [200, 40, 40, 255]
            }
        })
        .collect()
}

///
/// Renders a rotated, scaled checkerboard and a translucent square once with each sampling method, writing the frames to PNG files
///
pub fn main() {
    let mut engine  = Engine::new(320, 240).unwrap();
    let board       = engine.create_sprite(checkerboard(64, 64), 64, 64).unwrap();
    let square      = engine.create_rect_sprite(80, 80, 40, 90, 220, 160).unwrap();

    engine.set_background_color(20, 20, 30, 255);

    // The board is updated through a proxy, which only sends the rotation and scale when they change
    let mut board_proxy = SpriteProxy::new(board);
    board_proxy.set_position(-40.0, 0.0);
    board_proxy.rotate(0.4);
    board_proxy.set_scale(2.2, 1.6);
    board_proxy.sync(&mut engine).unwrap();

    engine.set_sprite_position(square, 60.0, 20.0).unwrap();
    engine.set_sprite_rotation(square, -0.25).unwrap();
    engine.set_sprite_z_index(square, 1).unwrap();

    engine.add_to_scene(board).unwrap();
    engine.add_to_scene(square).unwrap();

    for method in SamplingMethod::ALL {
        engine.set_sampling_method(method);
        engine.render();

        let filename = format!("sprites_{:?}.png", method).to_lowercase();
        engine.frame_buffer().write_png(File::create(&filename).unwrap()).unwrap();

        println!("Wrote {}", filename);
    }
}
