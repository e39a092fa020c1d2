use crate::prelude::*;

///
/// Pass
///
/// Extra resolution step run after the resolver and before any operation is
/// built. Passes may only add attributes; the store's write-once rule holds.
///

pub trait Pass {
    fn name(&self) -> &'static str;

    fn run(
        &self,
        pkg: &Package,
        store: &mut AttrStore,
        diags: &mut Diagnostics,
    ) -> Result<(), AttrError>;
}

///
/// ForceLoadPass
///
/// Marks fields tagged `ui:forceLoad = true` so they are selected whenever
/// their entity is selected as a reference.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ForceLoadPass;

impl Pass for ForceLoadPass {
    fn name(&self) -> &'static str {
        "force-load"
    }

    fn run(
        &self,
        pkg: &Package,
        store: &mut AttrStore,
        _diags: &mut Diagnostics,
    ) -> Result<(), AttrError> {
        let ui = LayerSpec::new(tags::UI);

        for field in pkg.entities().iter().flat_map(|e| e.fields.iter()) {
            if ui.read(&field.directives).bool_or(tags::FORCE_LOAD, false) {
                store.set(field.id, Namespace::Js, AttrKey::FieldForceLoad, true)?;
            }
        }

        Ok(())
    }
}

///
/// TESTS
///
