use std::{cell::OnceCell, fs, io::Write as _, sync::Arc};

use headless_chrome::{Browser, LaunchOptions, types::PrintToPdfOptions};
use log::{debug, info};

use super::{PdfEngine, RenderJob, ensure_parent};
use crate::{error::MdpdfError, utils::file_url};

/// Prints PDFs with a headless Chromium.
///
/// The browser is launched on the first render and reused for every
/// following document.
#[derive(Default)]
pub struct ChromeEngine {
  browser: OnceCell<Arc<Browser>>,
}

impl ChromeEngine {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  fn browser(&self) -> Result<Arc<Browser>, MdpdfError> {
    if let Some(browser) = self.browser.get() {
      return Ok(Arc::clone(browser));
    }

    info!("Launching headless browser");
    let options = LaunchOptions::default_builder()
      .headless(true)
      .sandbox(false)
      .build()
      .map_err(|e| {
        MdpdfError::Browser(format!("Failed to build launch options: {e}"))
      })?;
    let browser = Arc::new(Browser::new(options).map_err(|e| {
      MdpdfError::Browser(format!(
        "Failed to launch Chrome or Chromium, is one installed? {e}"
      ))
    })?);

    Ok(Arc::clone(self.browser.get_or_init(|| browser)))
  }
}

impl PdfEngine for ChromeEngine {
  fn name(&self) -> &'static str {
    "chrome"
  }

  fn extension(&self) -> &'static str {
    "pdf"
  }

  fn render(&self, job: &RenderJob) -> Result<(), MdpdfError> {
    let mut page = tempfile::Builder::new()
      .prefix("mdpdf_")
      .suffix(".html")
      .tempfile()?;
    page.write_all(job.html.as_bytes())?;
    page.flush()?;

    let browser = self.browser()?;
    let tab = browser
      .new_tab()
      .map_err(|e| MdpdfError::Browser(format!("Failed to open a tab: {e}")))?;

    let url = file_url(page.path());
    debug!("Loading {url}");
    tab
      .navigate_to(&url)
      .map_err(|e| MdpdfError::Browser(format!("Failed to navigate: {e}")))?;
    tab.wait_until_navigated().map_err(|e| {
      MdpdfError::Browser(format!("Failed to wait for navigation: {e}"))
    })?;
    tab.wait_for_element("body").map_err(|e| {
      MdpdfError::Browser(format!("Document body never appeared: {e}"))
    })?;

    let (paper_width, paper_height) = job.page_format.dimensions_in_inches();
    let options = PrintToPdfOptions {
      landscape: Some(false),
      display_header_footer: Some(job.show_header_footer),
      header_template: Some(job.header.clone()),
      footer_template: Some(job.footer.clone()),
      print_background: Some(true),
      paper_width: Some(paper_width),
      paper_height: Some(paper_height),
      margin_top: Some(job.margins.top.to_inches()),
      margin_bottom: Some(job.margins.bottom.to_inches()),
      margin_left: Some(job.margins.left.to_inches()),
      margin_right: Some(job.margins.right.to_inches()),
      prefer_css_page_size: Some(false),
      ..Default::default()
    };

    let pdf = tab
      .print_to_pdf(Some(options))
      .map_err(|e| MdpdfError::Render(format!("Failed to print PDF: {e}")))?;

    // Closing the tab is best effort, the PDF is already in memory.
    if let Err(e) = tab.close(false) {
      debug!("Failed to close tab: {e}");
    }

    ensure_parent(&job.destination)?;
    fs::write(&job.destination, pdf)?;
    Ok(())
  }
}
