//! Build configuration profiles and the macros they produce.
//!
//! Two profiles feed the same formatter:
//! - [`DirNames`]: installation directory names only.
//! - [`BuildInfo`]: version, release, toolchain and platform details, plus the
//!   directory names.
//!
//! All values are opaque strings. Nothing is parsed or validated beyond the
//! quoting applied when the header is rendered.

use crate::defs::DefinitionSet;
use crate::error::Result;

/// Macro that enables the runtime logging facility in debug builds.
pub const USE_LOGS_MACRO: &str = "ALUSUS_USE_LOGS";

/// Installation directory names, relative to the install prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNames {
    pub bin: String,
    pub lib: String,
    pub include: String,
}

impl Default for DirNames {
    fn default() -> Self {
        Self {
            bin: "bin".to_string(),
            lib: "lib".to_string(),
            include: "include".to_string(),
        }
    }
}

impl DirNames {
    /// Appends the directory name macros to `set`.
    pub fn add_definitions(&self, set: &mut DefinitionSet) -> Result<()> {
        set.define("ALUSUS_BIN_DIR_NAME", &self.bin)?
            .define("ALUSUS_LIB_DIR_NAME", &self.lib)?
            .define("ALUSUS_INCLUDE_DIR_NAME", &self.include)?;
        Ok(())
    }

    pub fn definitions(&self) -> Result<DefinitionSet> {
        let mut set = DefinitionSet::new();
        self.add_definitions(&mut set)?;
        Ok(set)
    }
}

/// Full build description as passed in by the build system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub revision: String,
    pub shlib_version: String,
    pub release_date: String,
    /// Release date on the Hijri calendar.
    pub hijri_release_date: String,
    /// Compiler identifier, e.g. `GNU` or `Clang`.
    pub compiler: String,
    /// Build type label, e.g. `Debug` or `Release`.
    pub build_type: String,
    pub system_name: String,
    pub system_processor: String,
    pub dirs: DirNames,
}

impl BuildInfo {
    /// Whether this is a debug build. The comparison ignores case.
    pub fn is_debug(&self) -> bool {
        self.build_type.eq_ignore_ascii_case("debug")
    }

    /// Builds the definition set in its fixed order.
    ///
    /// Build type, system name, and processor each get an extra `_LOWER`
    /// macro, and debug builds get the valueless [`USE_LOGS_MACRO`] flag last.
    pub fn definitions(&self) -> Result<DefinitionSet> {
        let mut set = DefinitionSet::new();
        set.define("ALUSUS_VERSION", &self.version)?
            .define("ALUSUS_REVISION", &self.revision)?
            .define("ALUSUS_SHLIB_VERSION", &self.shlib_version)?
            .define("ALUSUS_RELEASE_DATE", &self.release_date)?
            .define("ALUSUS_HIJRI_RELEASE_DATE", &self.hijri_release_date)?
            .define("ALUSUS_CXX_COMPILER_ID", &self.compiler)?
            .define("ALUSUS_CMAKE_BUILD_TYPE", &self.build_type)?
            .define_lower("ALUSUS_CMAKE_BUILD_TYPE", &self.build_type)?
            .define("ALUSUS_CMAKE_SYSTEM_NAME", &self.system_name)?
            .define_lower("ALUSUS_CMAKE_SYSTEM_NAME", &self.system_name)?
            .define("ALUSUS_CMAKE_SYSTEM_PROCESSOR", &self.system_processor)?
            .define_lower("ALUSUS_CMAKE_SYSTEM_PROCESSOR", &self.system_processor)?;

        self.dirs.add_definitions(&mut set)?;

        if self.is_debug() {
            set.flag(USE_LOGS_MACRO)?;
        }

        Ok(set)
    }
}
