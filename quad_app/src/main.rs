//! Textured spinning-quad demo
//!
//! Builds every GPU object once, then runs a straight-line frame loop:
//! poll events, rebuild the model matrix from elapsed time, clear, bind
//! both textures, draw, swap.

use gl_engine::prelude::*;
use gl_engine::render;
use log::{error, warn};
use std::process;

/// Optional override file; absent means the built-in defaults
const CONFIG_PATH: &str = "quad_app.toml";

fn main() {
    logging::init();

    let config = match ApplicationConfig::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            error!("Bad configuration: {}", e);
            process::exit(-1);
        }
    };

    let mut window = match Window::new(&config.window) {
        Ok(window) => window,
        Err(e) => {
            error!("Program cannot start: {}", e);
            process::exit(-1);
        }
    };

    let mesh = QuadMesh::new();
    let material = load_texture(&config.textures.material_path);
    let mask = load_texture(&config.textures.mask_path);

    let shader = match ShaderProgram::from_files(
        &config.shaders.vertex_path,
        &config.shaders.fragment_path,
    ) {
        Ok(shader) => shader,
        Err(e) => {
            error!("{}", e);
            process::exit(-1);
        }
    };

    // Static uniforms: sampler units and the camera matrices never change
    shader.bind();
    shader.set_uniform_1i("material", 0);
    shader.set_uniform_1i("mask", 1);

    let camera = Camera::from_config(&config.camera);
    shader.set_uniform_mat4("view", &camera.view_matrix());
    shader.set_uniform_mat4("projection", &camera.projection_matrix(window.aspect_ratio()));

    render::enable_alpha_blending();
    render::set_clear_color(0.25, 0.5, 0.75, 1.0);

    let quad_position = Vec3::new(-0.2, 0.4, 0.0);
    let mut timer = Timer::new();

    while !window.should_close() {
        window.poll_events();
        timer.update();

        let model = Mat4::translation(quad_position) * Mat4::rotation_z(timer.total_time());
        shader.set_uniform_mat4("model", &model);

        render::clear();
        shader.bind();
        material.bind(0);
        mask.bind(1);
        mesh.draw();

        window.swap_buffers();
    }
}

/// Load a texture, substituting solid white when the file is missing
fn load_texture(path: &str) -> Texture {
    match Texture::from_file(path) {
        Ok(texture) => texture,
        Err(e) => {
            warn!("{}; substituting a solid white texture", e);
            Texture::from_image(&ImageData::solid_color(1, 1, [255, 255, 255, 255]))
        }
    }
}
