/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod stock_check_request;
mod stock_check_response;

pub use output_format::OutputFormat;
pub use stock_check_request::StockCheckRequest;
pub use stock_check_response::StockCheckResponse;
