/// One headline as surfaced in the list. Every field may be absent in the
/// provider response; equality is derived, there is no identity field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

impl Article {
    /// The link, if it is non-empty and an absolute URL. Rows without a
    /// usable link are inert on activation.
    pub fn usable_link(&self) -> Option<&str> {
        let link = self.link.as_deref()?.trim();
        if link.is_empty() {
            return None;
        }
        url::Url::parse(link).ok()?;
        Some(link)
    }
}
