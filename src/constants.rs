pub const GUI_SIDEBAR_WIDTH: f32 = 360.0;
pub const GUI_PREVIEW_SIZE: f32 = 500.0;
pub const GUI_PREVIEW_PADDING: f32 = 16.0;
pub const GUI_TEXT_INPUT_WIDTH: f32 = 220.0;

pub const NAME_MAX_CHARS: usize = 35;

pub const DEFAULT_NAME: &str = "John";
pub const DEFAULT_NUMBER: &str = "10";

pub const CLOUDINARY_HOST: &str = "https://res.cloudinary.com";
pub const CLOUDINARY_CLOUD_NAME: &str = "demo";
pub const BASE_TSHIRT_IMAGE: &str = "shirt-06";

pub const NAME_EMPTY_MESSAGE: &str = "Name cannot be empty.";
pub const NUMBER_EMPTY_MESSAGE: &str = "Number cannot be empty.";
pub const PREVIEW_PLACEHOLDER: &str = "Please enter valid details to generate T-shirt preview.";
