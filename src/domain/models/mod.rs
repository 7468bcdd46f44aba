mod api_response;
mod chat_message;
mod generation_params;
mod model_descriptor;

pub use api_response::*;
pub use chat_message::*;
pub use generation_params::*;
pub use model_descriptor::*;
