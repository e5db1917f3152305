use crate::error::Result;
use crate::registry::Registry;
use crate::seed;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Flat key-value snapshot store: one JSON file per collection under the
/// data directory, seeded from the demo fixtures on first use.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn base_dir() -> Result<PathBuf> {
        let mut path = dirs::home_dir()
            .ok_or_else(|| std::io::Error::other("could not find home directory"))?;
        path.push(".pawhub");
        if !path.exists() {
            fs::create_dir_all(&path)?;
        }
        Ok(path)
    }

    pub fn new() -> Result<Self> {
        Ok(Self::from_dir(Self::base_dir()?))
    }

    pub fn from_dir(dir: PathBuf) -> Self {
        if !dir.exists() {
            let _ = fs::create_dir_all(&dir);
        }
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read one collection, falling back to (and writing out) the given
    /// fixture when the file does not exist yet.
    fn load_or_seed<T>(&self, key: &str, fixture: Vec<T>) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        let path = self.path(key);
        if path.exists() {
            let data = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            debug!(key, "seeding collection from fixtures");
            self.save_collection(key, &fixture)?;
            Ok(fixture)
        }
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let path = self.path(key);
        let data = serde_json::to_string_pretty(items)?;
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, &data)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Load every collection into a registry. Products and tutorials are
    /// a fixed catalog and always come from the fixtures.
    pub fn load_registry(&self) -> Result<Registry> {
        Ok(Registry {
            owners: self.load_or_seed("owners", seed::demo_owners())?,
            pets: self.load_or_seed("pets", seed::demo_pets())?,
            providers: self.load_or_seed("providers", seed::demo_providers())?,
            appointments: self.load_or_seed("appointments", seed::demo_appointments())?,
            meetups: self.load_or_seed("meetups", seed::demo_meetups())?,
            products: seed::demo_products(),
            tutorials: seed::demo_tutorials(),
            client_links: self.load_or_seed("client_links", Vec::new())?,
        })
    }

    pub fn save_registry(&self, registry: &Registry) -> Result<()> {
        self.save_collection("owners", &registry.owners)?;
        self.save_collection("pets", &registry.pets)?;
        self.save_collection("providers", &registry.providers)?;
        self.save_collection("appointments", &registry.appointments)?;
        self.save_collection("meetups", &registry.meetups)?;
        self.save_collection("client_links", &registry.client_links)?;
        Ok(())
    }

    /// Drop every persisted collection so the next load reseeds from the
    /// demo fixtures.
    pub fn reset(&self) -> Result<()> {
        for key in [
            "owners",
            "pets",
            "providers",
            "appointments",
            "meetups",
            "client_links",
        ] {
            let path = self.path(key);
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}
