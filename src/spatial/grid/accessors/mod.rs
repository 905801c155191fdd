mod type_color;
mod particle_ops;
