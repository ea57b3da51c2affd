/// Domain services
mod report_renderer;

pub use report_renderer::ReportRenderer;
