//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Orrery Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Orrery"
# width = 800            # 1-16384
# height = 600           # 1-16384

[camera]
# position = [0.0, 0.5, 15.0]
# yaw = -90.0            # degrees, -90 looks down -Z
# pitch = 0.0            # -89 to 89
# fov = 90.0             # 1-179, also the scroll-zoom limit
# near = 0.1
# far = 100.0
# move_speed = 2.5       # units per second (W/A/S/D)
# mouse_sensitivity = 0.1

[light]
# orbit_radius = 10.0
# orbit_speed = 1.5      # radians per second
# speed_step = 0.05      # H speeds up, J slows down
# debounce = 0.15        # seconds between speed changes
# color = [1.0, 1.0, 1.0]
# wireframe = true

[light.segments]
# x = 25                 # longitude steps, 1-4096
# y = 25                 # latitude steps, 1-4096

[body]
# scale = 1.5
# offset = [0.0, -1.5, 0.0]
# color = [0.8, 0.8, 0.8]

[body.segments]
# x = 48
# y = 32

[render]
# clear_color = [0.05, 0.05, 0.05]
# vsync = true

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
