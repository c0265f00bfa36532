//! Flag image loading and prefetch

use super::App;
use eframe::egui;
use tracing::debug;

impl App {
    /// Download every flag PNG that is not already cached on disk.
    pub fn start_flag_prefetch(&mut self, ctx: &egui::Context) {
        let cache_dir = self.cache_dir.clone();
        let ctx_clone = ctx.clone();
        let flags: Vec<(String, String)> = self
            .countries
            .iter()
            .filter(|c| !c.alpha3_code.is_empty() && !c.flags.png.is_empty())
            .map(|c| (c.alpha3_code.clone(), c.flags.png.clone()))
            .collect();

        debug!(count = flags.len(), "Starting flag prefetch");

        self.runtime.spawn(async move {
            let client = reqwest::Client::new();
            let semaphore = std::sync::Arc::new(tokio::sync::Semaphore::new(8));

            let flag_dir = cache_dir.join("flags");
            std::fs::create_dir_all(&flag_dir).ok();

            let mut handles = vec![];

            for (code, url) in flags {
                let flag_path = flag_dir.join(format!("{}.png", code));
                if flag_path.exists() {
                    continue;
                }

                let sem = semaphore.clone();
                let client = client.clone();
                let ctx = ctx_clone.clone();

                let handle = tokio::spawn(async move {
                    let _permit = sem.acquire().await.ok();
                    if let Ok(response) = client.get(&url).send().await {
                        if response.status().is_success() {
                            if let Ok(bytes) = response.bytes().await {
                                std::fs::write(&flag_path, &bytes).ok();
                                ctx.request_repaint();
                            }
                        }
                    }
                });
                handles.push(handle);
            }

            for handle in handles {
                handle.await.ok();
            }
        });
    }

    /// Load a cached flag into a texture, memoizing per alpha-3 code.
    pub fn load_flag(&mut self, ctx: &egui::Context, code: &str) -> Option<egui::TextureHandle> {
        if code.is_empty() {
            return None;
        }
        if let Some(cached) = self.flag_cache.get(code) {
            return cached.clone();
        }

        let flag_path = self.cache_dir.join("flags").join(format!("{}.png", code));

        if flag_path.exists() {
            let texture = image::open(&flag_path).ok().map(|img| {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let pixels = rgba.into_raw();
                ctx.load_texture(
                    code,
                    egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                    egui::TextureOptions::LINEAR,
                )
            });
            self.flag_cache.insert(code.to_string(), texture.clone());
            return texture;
        }

        None
    }
}
