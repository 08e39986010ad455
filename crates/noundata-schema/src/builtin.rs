//! The builtin schema for the supported game version: primitive types, file
//! bindings, and the struct graph for the asset types the server consumes.

use crate::catalog::Catalog;
use crate::types::TypeKind;

impl Catalog {
    /// Build the full builtin catalog. Deterministic; the result passes
    /// [`Catalog::validate`].
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();

        register_primitives(&mut catalog);
        register_bindings(&mut catalog);
        register_phase(&mut catalog);
        register_noun(&mut catalog);
        register_character_classes(&mut catalog);
        register_ai(&mut catalog);
        register_tuning(&mut catalog);
        register_loot(&mut catalog);
        register_catalog_manifest(&mut catalog);
        register_levels(&mut catalog);

        catalog
    }
}

fn register_primitives(catalog: &mut Catalog) {
    catalog.add_type("bool", TypeKind::Bool, 1);
    catalog.add_type("int", TypeKind::Int, 4);
    catalog.add_type("int16_t", TypeKind::Int16, 2);
    catalog.add_type("int64_t", TypeKind::Int64, 8);
    catalog.add_type("uint8_t", TypeKind::UInt8, 1);
    catalog.add_type("uint16_t", TypeKind::UInt16, 2);
    catalog.add_type("uint32_t", TypeKind::UInt32, 4);
    catalog.add_type("uint64_t", TypeKind::UInt64, 8);
    catalog.add_type("float", TypeKind::Float, 4);
    catalog.add_type("guid", TypeKind::Guid, 16);
    catalog.add_type("cSPVector2", TypeKind::Vector2, 8);
    catalog.add_type("cSPVector3", TypeKind::Vector3, 12);
    catalog.add_type("cSPVector4", TypeKind::Quaternion, 16);
    catalog.add_type("cLocalizedAssetString", TypeKind::LocalizedAssetString, 4);
    catalog.add_type("char", TypeKind::Char, 1);
    catalog.add_type("char*", TypeKind::CharPtr, 4);
    catalog.add_type("key", TypeKind::Key, 4);
    catalog.add_type("asset", TypeKind::Asset, 4);
    catalog.add_type("cKeyAsset", TypeKind::KeyAsset, 16);
    catalog.add_type("nullable", TypeKind::Nullable, 4);
    catalog.add_type("array", TypeKind::Array, 4);
    catalog.add_type("enum", TypeKind::Enum, 4);
}

fn register_bindings(catalog: &mut Catalog) {
    catalog.register_file_type(".AffixTuning", &["AffixTuning"], 24);
    catalog.register_file_type(".AIDefinition", &["AIDefinition"], 640);
    catalog.register_file_name("catalog_131", &["Catalog"], 8);
    catalog.register_file_type(".ChainLevels", &["ChainLevels"], 12);
    catalog.register_file_type(".CharacterAnimation", &["CharacterAnimation"], 660);
    catalog.register_file_type(".CharacterType", &["CharacterType"], 0);
    catalog.register_file_type(".ClassAttributes", &["ClassAttributes"], 0);
    catalog.register_file_type(".Condition", &["Condition"], 36);
    catalog.register_file_type(".CrystalTuning", &["CrystalTuning"], 20);
    catalog.register_file_type(".DifficultyTuning", &["DifficultyTuning"], 72);
    catalog.register_file_type(".DirectorTuning", &["DirectorTuning"], 16);
    catalog.register_file_type(".EliteNPCGlobals", &["EliteNPCGlobals"], 24);
    catalog.register_file_type(".LevelObjectives", &["LevelObjectives"], 40);
    catalog.register_file_type(".LootPreferences", &["LootPreferences"], 0);
    catalog.register_file_type(".LootRigblock", &["LootRigblock"], 140);
    catalog.register_file_type(".MagicNumbers", &["MagicNumbers"], 0);
    catalog.register_file_type(".NavPowerTuning", &["NavPowerTuning"], 12);
    catalog.register_file_type(".NonPlayerClass", &["NonPlayerClass"], 124);
    catalog.register_file_type(".Noun", &["Noun"], 480);
    catalog.register_file_type(".NPCAffix", &["NPCAffix"], 44);
    catalog.register_file_type(".Phase", &["Phase"], 68);
    catalog.register_file_type(".PlayerClass", &["PlayerClass"], 256);
    catalog.register_file_type(".PVPLevels", &["PVPLevels"], 8);
    catalog.register_file_type(".SectionConfig", &["SectionConfig"], 8);
    catalog.register_file_type(".ServerEventDef", &["ServerEventDef"], 16);
    catalog.register_file_type(".TestAsset", &["TestAsset"], 0);
    catalog.register_file_type(".UnlocksTuning", &["UnlocksTuning"], 40);
    catalog.register_file_type(".WeaponTuning", &["WeaponTuning"], 8);
}

fn register_phase(catalog: &mut Catalog) {
    catalog
        .add_struct("cAssetProperty", 188)
        .field("name", "char", 4)
        .field("value", "char", 88)
        .field("type", "guid", 84);

    catalog
        .add_struct("cAssetPropertyList", 8)
        .array("mpAssetProperties", "cAssetProperty", 0);

    catalog
        .add_struct("cGambitDefinition", 52)
        .field("condition", "key", 12)
        .array("conditionProps", "cAssetProperty", 16)
        .field("ability", "key", 36)
        .array("abilityProps", "cAssetProperty", 16)
        .field("randomizeCooldown", "bool", 48);

    catalog
        .add_struct("Phase", 68)
        .array("gambit", "cGambitDefinition", 0)
        .field("phaseType", "enum", 4)
        .field("startNode", "bool", 12);
}

fn register_noun(catalog: &mut Catalog) {
    catalog
        .add_struct("cSPBoundingBox", 0)
        .field("min", "cSPVector3", 32)
        .field("max", "cSPVector3", 44);

    catalog
        .add_struct("state", 56)
        .field("name", "key", 12)
        .field("model", "key", 28)
        .field("prefab", "asset", 48)
        .field("animation", "key", 44)
        .field("animationLoops", "bool", 52);

    catalog.add_struct("gfxStates", 8).array("state", "state", 0);

    catalog
        .add_struct("cNewGfxState", 40)
        .field("prefab", "asset", 0)
        .field("model", "key", 16)
        .field("animation", "key", 32);

    catalog
        .add_struct("doorDef", 24)
        .nullable("graphicsState_open", "cNewGfxState", 0)
        .nullable("graphicsState_opening", "cNewGfxState", 4)
        .nullable("graphicsState_closed", "cNewGfxState", 8)
        .nullable("graphicsState_closing", "cNewGfxState", 12)
        .field("clickToOpen", "bool", 16)
        .field("clickToClose", "bool", 17)
        .field("initialState", "enum", 20);

    catalog
        .add_struct("switchDef", 12)
        .nullable("graphicsState_unpressed", "cNewGfxState", 0)
        .nullable("graphicsState_pressing", "cNewGfxState", 4)
        .nullable("graphicsState_pressed", "cNewGfxState", 8);

    catalog
        .add_struct("cVolumeDef", 0)
        .field("shape", "enum", 0)
        .field("boxWidth", "float", 4)
        .field("boxLength", "float", 8)
        .field("boxHeight", "float", 12)
        .field("sphereRadius", "float", 16)
        .field("capsuleHeight", "float", 20)
        .field("capsuleRadius", "float", 24);

    catalog
        .add_struct("pressureSwitchDef", 40)
        .nullable("graphicsState_unpressed", "cNewGfxState", 0)
        .nullable("graphicsState_pressing", "cNewGfxState", 4)
        .nullable("graphicsState_pressed", "cNewGfxState", 8)
        .embed("cVolumeDef", 28);

    catalog
        .add_struct("crystalDef", 24)
        .field("modifier", "key", 0)
        .field("type", "enum", 4)
        .field("rarity", "enum", 16);

    catalog
        .add_struct("creatureThumbnailData", 108)
        .field("fovY", "float", 0)
        .field("nearPlane", "float", 4)
        .field("farPlane", "float", 8)
        .field("cameraPosition", "cSPVector3", 12)
        .field("cameraScale", "float", 24)
        .field("cameraRotation_0", "cSPVector3", 28)
        .field("cameraRotation_1", "cSPVector3", 40)
        .field("cameraRotation_2", "cSPVector3", 52)
        .field("mouseCameraDataValid", "bool", 64)
        .field("mouseCameraOffset", "cSPVector3", 68)
        .field("mouseCameraSubjectPosition", "cSPVector3", 80)
        .field("mouseCameraTheta", "float", 92)
        .field("mouseCameraPhi", "float", 96)
        .field("mouseCameraRoll", "float", 100)
        .field("poseAnimID", "uint32_t", 104);

    catalog
        .add_struct("events", 32)
        .field("onEnterEvent", "key", 12)
        .field("onExitEvent", "key", 28);

    catalog
        .add_struct("triggerVolume", 136)
        .field("onEnter", "key", 12)
        .field("onExit", "key", 28)
        .field("onStay", "key", 44)
        .nullable("events", "events", 48)
        .field("useGameObjectDimensions", "bool", 52)
        .field("isKinematic", "bool", 53)
        .field("shape", "enum", 56)
        .field("offset", "cSPVector3", 60)
        .field("timeToActivate", "float", 72)
        .field("persistentTimer", "bool", 76)
        .field("triggerOnceOnly", "bool", 77)
        .field("triggerIfNotBeaten", "bool", 78)
        .field("triggerActivationType", "enum", 80)
        .field("luaCallbackOnEnter", "char*", 84)
        .field("luaCallbackOnExit", "char*", 88)
        .field("luaCallbackOnStay", "char*", 92)
        .field("boxWidth", "float", 96)
        .field("boxLength", "float", 100)
        .field("boxHeight", "float", 104)
        .field("sphereRadius", "float", 108)
        .field("capsuleHeight", "float", 112)
        .field("capsuleRadius", "float", 116)
        .field("serverOnly", "bool", 120);

    catalog
        .add_struct("creatureCollisionVolume", 20)
        .field("shape", "enum", 0)
        .field("boxWidth", "float", 4)
        .field("boxLength", "float", 8)
        .field("boxHeight", "float", 12)
        .field("sphereRadius", "float", 16);

    catalog
        .add_struct("projectile", 12)
        .nullable("creatureCollisionVolume", "creatureCollisionVolume", 0)
        .nullable("otherCollisionVolume", "creatureCollisionVolume", 4)
        .field("targetType", "enum", 8);

    catalog
        .add_struct("orbit", 12)
        .field("orbitHeight", "float", 0)
        .field("orbitRadius", "float", 4)
        .field("orbitSpeed", "float", 8);

    catalog
        .add_struct("locomotionTuning", 12)
        .field("acceleration", "float", 0)
        .field("deceleration", "float", 4)
        .field("turnRate", "float", 8);

    catalog
        .add_struct("audioTrigger", 32)
        .field("type", "enum", 0)
        .field("sound", "key", 16)
        .field("bIs3D", "bool", 20)
        .field("retrigger", "bool", 21)
        .field("hardStop", "bool", 22)
        .field("isVoiceover", "bool", 23)
        .field("voiceLifetime", "float", 24)
        .nullable("triggerVolume", "triggerVolume", 28);

    catalog
        .add_struct("teleporter", 12)
        .field("destinationMarkerId", "uint32_t", 0)
        .nullable("triggerVolume", "triggerVolume", 4)
        .field("deferTriggerCreation", "bool", 8);

    catalog
        .add_struct("listener", 40)
        .field("event", "key", 0)
        .field("callback", "key", 28)
        .field("luaCallback", "char*", 36);

    catalog
        .add_struct("eventListenerDef", 8)
        .array("listener", "listener", 0);

    catalog
        .add_struct("spawnPointDef", 8)
        .field("sectionType", "enum", 0)
        .field("activatesSpike", "bool", 4);

    catalog
        .add_struct("spawnTrigger", 28)
        .nullable("triggerVolume", "triggerVolume", 0)
        .field("deathEvent", "key", 16)
        .field("challengeOverride", "uint32_t", 20)
        .field("waveOverride", "uint32_t", 24);

    catalog
        .add_struct("interactable", 72)
        .field("numUsesAllowed", "uint32_t", 0)
        .field("interactableAbility", "key", 16)
        .field("startInteractEvent", "key", 32)
        .field("endInteractEvent", "key", 48)
        .field("optionalInteractEvent", "key", 64)
        .field("challengeValue", "uint32_t", 68);

    catalog
        .add_struct("defaultGfxState", 24)
        .field("name", "key", 12)
        .field("animationStartTime", "float", 16)
        .field("animationRate", "float", 20);

    catalog.add_struct("combatant", 16).field("deathEvent", "key", 12);

    catalog
        .add_struct("triggerComponent", 4)
        .nullable("triggerVolume", "triggerVolume", 0);

    catalog
        .add_struct("spaceshipSpawnPoint", 4)
        .field("index", "uint32_t", 0);

    catalog
        .add_struct("SharedComponentData", 40)
        .nullable("audioTrigger", "audioTrigger", 0)
        .nullable("teleporter", "teleporter", 4)
        .nullable("eventListenerDef", "eventListenerDef", 8)
        .nullable("spawnPointDef", "spawnPointDef", 16)
        .nullable("spawnTrigger", "spawnTrigger", 12)
        .nullable("interactable", "interactable", 20)
        .nullable("defaultGfxState", "defaultGfxState", 24)
        .nullable("combatant", "combatant", 28)
        .nullable("triggerComponent", "triggerComponent", 32)
        .nullable("spaceshipSpawnPoint", "spaceshipSpawnPoint", 36);

    catalog
        .add_struct("Noun", 0)
        .field("nounType", "enum", 0)
        .field("clientOnly", "bool", 4)
        .field("isFixed", "bool", 5)
        .field("isSelfPowered", "bool", 6)
        .field("lifetime", "float", 12)
        .field("gfxPickMethod", "enum", 8)
        .field("graphicsScale", "float", 20)
        .field("modelKey", "key", 36)
        .field("prefab", "key", 16)
        .field("levelEditorModelKey", "key", 52)
        .embed("cSPBoundingBox", 24)
        .field("presetExtents", "enum", 80)
        .field("voice", "key", 96)
        .field("foot", "key", 112)
        .field("flightSound", "key", 128)
        .nullable("gfxStates", "gfxStates", 132)
        .nullable("doorDef", "doorDef", 136)
        .nullable("switchDef", "switchDef", 140)
        .nullable("pressureSwitchDef", "pressureSwitchDef", 144)
        .nullable("crystalDef", "crystalDef", 148)
        .field("assetId", "uint64_t", 152)
        .field("npcClassData", "asset", 160)
        .field("playerClassData", "asset", 164)
        .field("characterAnimationData", "asset", 168)
        .nullable("creatureThumbnailData", "creatureThumbnailData", 172)
        .array("eliteAssetIds", "uint64_t", 172)
        .field("physicsType", "enum", 184)
        .field("density", "float", 188)
        .field("physicsKey", "key", 204)
        .field("affectsNavMesh", "bool", 208)
        .field("dynamicWall", "bool", 209)
        .field("hasLocomotion", "bool", 219)
        .field("locomotionType", "enum", 220)
        .field("hasNetworkComponent", "bool", 216)
        .field("hasCombatantComponent", "bool", 218)
        .field("aiDefinition", "asset", 212)
        .field("hasCameraComponent", "bool", 212)
        .field("spawnTeamId", "enum", 224)
        .field("isIslandMarker", "bool", 228)
        .field("activateFnNamespace", "char*", 232)
        .field("tickFnNamespace", "char*", 236)
        .field("deactivateFnNamespace", "char*", 240)
        .field("startFnNamespace", "char*", 244)
        .field("endFnNamespace", "char*", 248)
        .field("gravityData", "asset", 308)
        .nullable("triggerVolume", "triggerVolume", 292)
        .nullable("projectile", "projectile", 296)
        .nullable("orbit", "orbit", 300)
        .nullable("locomotionTuning", "locomotionTuning", 304)
        .embed("SharedComponentData", 252)
        .field("isFlora", "bool", 328)
        .field("isMineral", "bool", 329)
        .field("isCreature", "bool", 330)
        .field("isPlayer", "bool", 331)
        .field("isSpawned", "bool", 332)
        .field("toonType", "key", 324)
        .field("modelEffect", "key", 348)
        .field("removalEffect", "key", 364)
        .field("meleeDeathEffect", "key", 396)
        .field("meleeCritEffect", "key", 412)
        .field("energyDeathEffect", "key", 428)
        .field("energyCritEffect", "key", 444)
        .field("plasmaDeathEffect", "key", 460)
        .field("plasmaCritEffect", "key", 476);
}

fn register_character_classes(catalog: &mut Catalog) {
    catalog
        .add_struct("cLongDescription", 20)
        .field("description", "cLocalizedAssetString", 0);

    catalog
        .add_struct("cEliteAffix", 12)
        .field("mpNPCAffix", "asset", 0)
        .field("minDifficulty", "uint32_t", 4)
        .field("maxDifficulty", "uint32_t", 8);

    catalog
        .add_struct("NonPlayerClass", 0)
        .field("testingOnly", "bool", 0)
        .field("name", "cLocalizedAssetString", 16)
        .field("creatureType", "enum", 4)
        .field("aggroRange", "float", 56)
        .field("alertRange", "float", 60)
        .field("dropAggroRange", "float", 64)
        .field("mNPCType", "enum", 68)
        .field("npcRank", "uint32_t", 68)
        .field("mpClassAttributes", "asset", 12)
        .field("mpClassEffect", "asset", 8)
        .field("description", "cLocalizedAssetString", 80)
        .array("dropType", "enum", 40)
        .field("dropDelay", "float", 52)
        .field("targetable", "bool", 76)
        .field("playerCountHealthScale", "float", 100)
        .array("cLongDescription", "cLongDescription", 104)
        .array("eliteAffix", "cEliteAffix", 112)
        .field("playerPet", "bool", 120);

    catalog
        .add_struct("PlayerClass", 0)
        .field("testingOnly", "bool", 0)
        .field("speciesName", "char*", 16)
        .field("nameLocaleKey", "key", 32)
        .field("shortNameLocaleKey", "key", 48)
        .field("creatureType", "enum", 4)
        .field("localeTableID", "key", 64)
        .field("homeworld", "enum", 68)
        .field("creatureClass", "enum", 72)
        .field("primaryAttribute", "enum", 76)
        .field("unlockLevel", "uint32_t", 80)
        .field("basicAbility", "uint32_t", 96)
        .field("specialAbility1", "key", 112)
        .field("specialAbility2", "key", 128)
        .field("specialAbility3", "key", 144)
        .field("passiveAbility", "key", 160)
        .field("sharedAbilityOffset", "cSPVector3", 172)
        .field("sharedAbilityOffset", "key", 172)
        .field("mpClassAttributes", "asset", 12)
        .field("mpClassEffect", "asset", 8)
        .field("originalHandBlock", "key", 196)
        .field("originalFootBlock", "key", 212)
        .field("originalWeaponBlock", "key", 228)
        .field("weaponMinDamage", "float", 232)
        .field("weaponMaxDamage", "float", 236)
        .field("noHands", "bool", 248)
        .field("noFeet", "bool", 249)
        .array("descriptionTag", "enum", 164)
        .array("editableCharacterPart", "cKeyAsset", 240);

    catalog
        .add_struct("CharacterAnimation", 0)
        .field("gaitOverlay", "uint32_t", 80)
        .field("overrideGait", "char", 0)
        .field("ignoreGait", "bool", 84)
        .field("morphology", "key", 100)
        .field("preAggroIdleAnimState", "key", 116)
        .field("idleAnimState", "key", 132)
        .field("lobbyIdleAnimState", "key", 148)
        .field("specialIdleAnimState", "key", 164)
        .field("walkStopState", "key", 180)
        .field("victoryIdleAnimState", "key", 196)
        .field("combatIdleAnimState", "key", 212)
        .field("moveAnimState", "key", 228)
        .field("combatMoveAnimState", "key", 244)
        .field("deathAnimState", "key", 260)
        .field("aggroAnimState", "key", 276)
        .field("aggroAnimDuration", "float", 280)
        .field("subsequentAggroAnimState", "key", 296)
        .field("subsequentAggroAnimDuration", "float", 300)
        .field("enterPassiveIdleAnimState", "key", 316)
        .field("enterPassiveIdleAnimDuration", "float", 320)
        .field("danceEmoteAnimState", "key", 336)
        .field("meleeDeathAnimState", "key", 352)
        .field("meleeCritDeathAnimState", "key", 368)
        .field("meleeCritKnockbackDeathAnimState", "key", 384)
        .field("cyberCritDeathAnimState", "key", 400)
        .field("cyberCritKnockbackDeathAnimState", "key", 416)
        .field("plasmaCritDeathAnimState", "key", 432)
        .field("plasmaCritKnockbackDeathAnimState", "key", 448)
        .field("bioCritDeathAnimState", "key", 464)
        .field("bioCritKnockbackDeathAnimState", "key", 480)
        .field("necroCritDeathAnimState", "key", 496)
        .field("necroCritKnockbackDeathAnimState", "key", 512)
        .field("spacetimeCritDeathAnimState", "key", 528)
        .field("spacetimeCritKnockbackDeathAnimState", "key", 544)
        .field("bodyFadeAnimState", "key", 560)
        .field("randomAbility1AnimState", "key", 576)
        .field("randomAbility2AnimState", "key", 592)
        .field("randomAbility3AnimState", "key", 608)
        .field("overlay1AnimState", "key", 624)
        .field("overlay2AnimState", "key", 640)
        .field("overlay3AnimState", "key", 656);

    catalog
        .add_struct("NPCAffix", 0)
        .field("modifier", "key", 12)
        .field("mpChildAffix", "key", 16)
        .field("mpParentAffix", "key", 20)
        .field("description", "cLocalizedAssetString", 24);

    catalog
        .add_struct("ClassAttributes", 0)
        .field("baseHealth", "float", 0)
        .field("baseMana", "float", 4)
        .field("baseStrength", "float", 8)
        .field("baseDexterity", "float", 12)
        .field("baseMind", "float", 16)
        .field("basePhysicalDefense", "float", 20)
        .field("baseMagicalDefense", "float", 24)
        .field("baseEnergyDefense", "float", 28)
        .field("baseCritical", "float", 32)
        .field("baseCombatSpeed", "float", 36)
        .field("baseNonCombatSpeed", "float", 40)
        .field("baseStealthDetection", "float", 44)
        .field("baseMovementSpeedBuff", "float", 48)
        .field("maxHealth", "float", 52)
        .field("maxMana", "float", 56)
        .field("maxStrength", "float", 60)
        .field("maxDexterity", "float", 64)
        .field("maxMind", "float", 68)
        .field("maxPhysicalDefense", "float", 72)
        .field("maxMagicalDefense", "float", 76)
        .field("maxEnergyDefense", "float", 80)
        .field("maxCritical", "float", 84);

    catalog
        .add_struct("CharacterType", 0)
        .field("BaseResistance_Technology", "float", 0)
        .field("BaseResistance_Spacetime", "float", 12)
        .field("BaseResistance_Life", "float", 24)
        .field("BaseResistance_Elements", "float", 36)
        .field("BaseResistance_Supernatural", "float", 48)
        .field("DamageMultiplier_Technology", "float", 60)
        .field("DamageMultiplier_Spacetime", "float", 72)
        .field("DamageMultiplier_Life", "float", 84)
        .field("DamageMultiplier_Elements", "float", 96)
        .field("DamageMultiplier_Supernatural", "float", 108)
        .field("UIColor", "uint32_t", 120);
}

fn register_ai(catalog: &mut Catalog) {
    catalog
        .add_struct("cAINode", 28)
        .field("mpPhaseData", "key", 0)
        .field("mpConditionData", "key", 4)
        .field("nodeX", "uint32_t", 12)
        .field("nodeY", "uint32_t", 16)
        .field("output", "uint32_t", 20);

    catalog
        .add_struct("AIDefinition", 0)
        .array("cAINode", "cAINode", 0)
        .field("deathAbility", "key", 20)
        .field("deathCondition", "key", 36)
        .field("firstAggroAbility", "key", 52)
        .field("firstAggroAbility2", "key", 68)
        .field("firstAlertAbility", "key", 84)
        .field("subsequentAggroAbility", "key", 100)
        .field("passiveAbility", "key", 116)
        .field("aggroType", "uint32_t", 116)
        .field("combatIdle", "char", 284)
        .field("combatIdleCooldown", "uint32_t", 364)
        .field("combatIdle2", "char", 448)
        .field("combatIdle2Condition", "key", 540)
        .field("combatIdle2Cooldown", "uint32_t", 544)
        .field("passiveIdle", "char", 368)
        .field("preAggroIdle", "char", 124)
        .field("preAggroIdle2", "char", 204)
        .field("useSecondaryStart", "float", 636)
        .field("targetTooFar", "char", 548)
        .field("targetTooFarCooldown", "char", 628)
        .field("faceTarget", "bool", 632)
        .field("alwaysRunAI", "bool", 633)
        .field("randomizeCooldowns", "bool", 634);

    catalog
        .add_struct("Condition", 0)
        .field("condition", "key", 12)
        .named("conditionProps", "cAssetPropertyList", 16)
        .field("activateOnce", "bool", 24)
        .field("checkOnSequenceEnd", "bool", 25)
        .field("activateTime", "float", 28)
        .field("checkTimeInterval", "float", 32);
}

fn register_tuning(catalog: &mut Catalog) {
    catalog
        .add_struct("AffixTuning", 0)
        .array("positiveChance", "uint32_t", 0)
        .array("minorChance", "uint32_t", 8)
        .array("majorChance", "uint32_t", 16);

    catalog
        .add_struct("CrystalLevel", 8)
        .field("offset", "uint32_t", 0)
        .field("probability", "float", 4);

    catalog
        .add_struct("CrystalDropDef", 16)
        .field("minLevel", "uint32_t", 0)
        .field("maxLevel", "uint32_t", 4)
        .field("weight", "uint32_t", 8)
        .field("mpNoun", "asset", 12);

    catalog
        .add_struct("CrystalTuning", 0)
        .field("threeInARowBonusPercent", "float", 0)
        .array("CrystalLevel", "CrystalLevel", 12)
        .array("crystal", "CrystalDropDef", 4);

    catalog
        .add_struct("DifficultyTuning", 0)
        .array("HealthPercentIncrease", "float", 0)
        .array("DamagePercentIncrease", "float", 8)
        .array("ItemLevelRange", "cSPVector2", 16)
        .array("GearScoreRange", "cSPVector2", 24)
        .field("GearScoreMax", "cSPVector2", 32)
        .array("ExpectedAvatarLevel", "uint32_t", 40)
        .array("RatingConversion", "float", 48)
        .field("StarModeHealthMult", "float", 56)
        .field("StarModeDamageMult", "float", 60)
        .field("StarModeEliteChanceAdd", "float", 64)
        .field("StarModeSuggestedLevelAdd", "float", 68);

    catalog
        .add_struct("DirectorTuning", 0)
        .array("HealthPercentIncrease", "float", 0)
        .array("DamagePercentIncrease", "uint32_t", 8);

    catalog
        .add_struct("cAffixDifficultyTuning", 24)
        .field("minAffixes", "uint32_t", 0)
        .field("maxAffixes", "uint32_t", 4)
        .field("chanceToSpawn", "float", 8)
        .field("specialMinAffixes", "uint32_t", 12)
        .field("specialMaxAffixes", "uint32_t", 16)
        .field("specialChanceToSpawn", "float", 20);

    catalog
        .add_struct("EliteNPCGlobals", 0)
        .array("perLevelTuning", "cAffixDifficultyTuning", 0)
        .field("textColor", "cSPVector4", 8);

    catalog.add_struct("LevelKey", 16).field("name", "key", 12);

    catalog
        .add_struct("LevelObjectives", 0)
        .array("objective", "LevelKey", 0)
        .array("affix", "LevelKey", 8)
        .array("positiveAffix", "LevelKey", 16)
        .array("minorAffix", "LevelKey", 24)
        .array("majorAffix", "LevelKey", 32);

    catalog
        .add_struct("MagicNumbers", 0)
        .field("DamagePerPointOfStrength", "float", 0)
        .field("DamagePerPointOfDexterity", "float", 4)
        .field("DamagePerPointOfMind", "float", 8)
        .field("HealthPerPointofStrength", "float", 12)
        .field("PhysicalDefensePerPointofDexterity", "float", 16)
        .field("CritRatingPerPointofDexterity", "float", 20)
        .field("EnergyDefensePerPointofMind", "float", 24)
        .field("ManaPerPointofMind", "float", 28)
        .field("DefenseRatingDecreaseMultiplier", "float", 32)
        .field("DefenseRatingDecreaseBase", "float", 36)
        .field("CriticalRatingDecreaseMultiplier", "float", 40)
        .field("CriticalRatingDecreaseBase", "float", 44)
        .field("CriticalDamageBonus", "float", 48)
        .field("PrimaryAttributeIgnoreAmount", "uint32_t", 52)
        .field("LeechEffectivenessForAoE", "float", 56)
        .field("LeechEffectivenessForAbilities", "float", 60)
        .field("LeechEffectivenessForBasics", "float", 64)
        .field("DodgePercentCap", "float", 68)
        .field("ResistPercentCap", "float", 72);

    catalog
        .add_struct("NavMeshLayer", 24)
        .field("name", "char*", 0)
        .field("voxelTestSize", "float", 4)
        .field("agentRadius", "float", 8)
        .field("agentHeight", "float", 12)
        .field("maxStepSize", "float", 16)
        .field("maxWalkableSlopeDegrees", "float", 20);

    catalog
        .add_struct("NavPowerTuning", 0)
        .field("maxWalkableSlopeDegrees", "float", 0)
        .array("navMeshLayers", "NavMeshLayer", 4);

    catalog
        .add_struct("DirectorBucket", 16)
        .field("numMinions", "uint32_t", 0)
        .field("numSpecials", "uint32_t", 4)
        .field("difficulty", "uint32_t", 8)
        .field("chance", "float", 12);

    catalog
        .add_struct("SectionConfig", 0)
        .array("bucket", "DirectorBucket", 0);

    catalog
        .add_struct("cAudioEventData", 32)
        .field("sound", "key", 12)
        .field("bIs3D", "bool", 16)
        .field("bIsVoiceOver", "bool", 18)
        .field("bHasLocalOffset", "bool", 17)
        .field("localOffset", "cSPVector3", 20);

    catalog
        .add_struct("cHardpointInfo", 24)
        .field("type", "enum", 0)
        .field("bodyCap", "enum", 4)
        .field("localOffset", "cSPVector3", 8)
        .field("attractor", "bool", 20)
        .field("attached", "bool", 21);

    catalog
        .add_struct("cEffectEventData", 64)
        .field("name", "key", 12)
        .field("bScaleWithObject", "bool", 16)
        .field("localizedTextKey", "key", 24)
        .field("bHasTextValue", "bool", 17)
        .field("bSetModelPointer", "bool", 18)
        .field("bZUpAlignment", "bool", 19)
        .field("bCreatureOrientationAlignment", "bool", 20)
        .field("bUseTargetPoint", "bool", 21)
        .field("bSetDirectionFromSecondaryObject", "bool", 22)
        .nullable("objectHardpoint", "cHardpointInfo", 22)
        .nullable("secondaryObjectHardpoint", "cHardpointInfo", 44)
        .field("screenShakeScaleLocalPlayer", "float", 48)
        .field("screenShakeScaleEveryone", "float", 52)
        .field("screenShakeScaleLocalPlayerCritical", "float", 56)
        .field("screenShakeScaleEveryoneCritical", "float", 60);

    catalog
        .add_struct("ServerEventDef", 0)
        .array("audio", "cAudioEventData", 0)
        .array("effects", "cEffectEventData", 8);

    catalog
        .add_struct("TestAsset", 0)
        .field("unk", "uint32_t", 0)
        .field("bar", "uint32_t", 4);

    catalog
        .add_struct("UnlockDef", 80)
        .field("id", "uint32_t", 0)
        .field("prerequisite", "uint32_t", 4)
        .field("cost", "uint32_t", 8)
        .field("level", "uint32_t", 12)
        .field("rank", "uint32_t", 16)
        .field("unlockType", "enum", 20)
        .field("value", "uint32_t", 24)
        .field("unlockFunction", "enum", 28)
        .field("image", "key", 44)
        .field("title", "key", 60)
        .field("description", "key", 76);

    catalog
        .add_struct("UnlocksTuning", 0)
        .array("unlock", "UnlockDef", 0);

    catalog
        .add_struct("WeaponDef", 32)
        .field("refId", "uint64_t", 0)
        .field("itemLevel", "uint32_t", 8)
        .field("rigblockId", "uint32_t", 12)
        .field("suffixId", "uint32_t", 16)
        .field("cost", "uint32_t", 20)
        .field("avatarLevel", "uint32_t", 24)
        .field("chainProgression", "uint32_t", 28);

    catalog
        .add_struct("WeaponTuning", 0)
        .array("weapon", "WeaponDef", 0);
}

fn register_loot(catalog: &mut Catalog) {
    catalog.add_struct("LootData", 4).field("name", "char*", 0);

    catalog
        .add_struct("LootRigblock", 0)
        .field("rigblockId", "uint32_t", 0)
        .field("rigblockName", "key", 16)
        .field("rigblockPropKey", "key", 32)
        .field("rigblockPartType", "char*", 36)
        .array("classTypes", "LootData", 40)
        .array("scienceTypes", "LootData", 48)
        .array("playerCharacters", "LootData", 56)
        .field("minLevel", "uint32_t", 64)
        .field("maxLevel", "uint32_t", 68)
        .field("rigblockPngKey", "key", 84)
        .field("rigblockCategoryKey", "key", 100)
        .field("isUnique", "bool", 104);

    catalog
        .add_struct("LootPreferences", 0)
        .field("slotChance_Offense", "float", 0)
        .field("slotChance_Defense", "float", 4)
        .field("slotChance_Utility", "float", 8)
        .field("slotChance_Weapon", "float", 12)
        .field("slotChance_Foot", "float", 16)
        .field("slotChance_Hand", "float", 20)
        .field("scienceChance_Tech", "float", 24)
        .field("scienceChance_Quantum", "float", 28)
        .field("scienceChance_Bio", "float", 32)
        .field("scienceChance_Plasma", "float", 36)
        .field("scienceChance_Necro", "float", 40)
        .field("npcDropRarityChances_Basic", "char", 44)
        .field("npcDropRarityChances_Uncommon", "char", 172)
        .field("npcDropRarityChances_Rare", "char", 300)
        .field("npcDropRarityChances_Epic", "char", 428)
        .field("majorLevelMultiplier", "uint32_t", 556)
        .field("minorLevelMultiplier", "uint32_t", 560)
        .field("lastMinorLevelBonus", "uint32_t", 564)
        .field("rarityLevelMultiplier", "uint32_t", 568)
        .field("pointValue_BasePoints", "float", 572)
        .field("pointValue_ExponentBasesPerItemLevel", "float", 576)
        .field("pointValue_ExtraStatsBonusFactor", "float", 704)
        .field("pointCost_Strength", "uint32_t", 708)
        .field("pointCost_Dexterity", "uint32_t", 712)
        .field("pointCost_Mind", "uint32_t", 716)
        .field("pointCost_Health", "uint32_t", 720)
        .field("pointCost_Mana", "uint32_t", 724)
        .field("pointCost_Critical", "uint32_t", 728)
        .field("pointCost_Dodge", "uint32_t", 732)
        .field("pointCost_Deflection", "uint32_t", 736)
        .field("pointCost_PhysicalDamageDecreaseFlat", "uint32_t", 740)
        .field("pointCost_EnergyDamageDecreaseFlat", "uint32_t", 744)
        .field("pointCost_MinWeaponDamage", "uint32_t", 748)
        .field("pointCost_MaxWeaponDamage", "uint32_t", 752)
        .field("pointCost_DirectAttackDamage", "uint32_t", 756)
        .field("basic_StandardDist", "float", 760)
        .field("basic_SuffixDist", "float", 764)
        .field("uncommon_SuffixDist", "float", 768)
        .field("uncommon_Prefix1Dist", "float", 772)
        .field("uncommon_Prefix2Dist", "float", 776)
        .field("uncommon_StandardDist", "float", 780)
        .field("rare_SuffixDist", "float", 784)
        .field("rare_Prefix1Dist", "float", 788)
        .field("rare_Prefix2Dist", "float", 792)
        .field("rare_StandardDist", "float", 796)
        .field("epic_SuffixDist", "float", 800)
        .field("epic_Prefix1Dist", "float", 804)
        .field("epic_Prefix2Dist", "float", 808)
        .field("epic_StandardDist", "float", 812)
        .field("itemCost_Multiplier", "float", 816)
        .field("itemCost_LevelPower", "float", 820)
        .field("itemCost_RoundingVal", "uint32_t", 824)
        .field("baseStatScale_Other", "float", 828)
        .field("baseStatScale_Hand", "float", 832)
        .field("baseStatScale_HandTwo", "float", 836)
        .field("baseStatScale_Feet", "float", 840)
        .field("baseStatScale_FeetTwo", "float", 844)
        .field("baseStatScale_Offense", "float", 848)
        .field("baseStatScale_Defense", "float", 852)
        .field("baseStatScale_Utility", "float", 856)
        .field("minDropLevel_Hands", "uint32_t", 860)
        .field("minDropLevel_Feet", "uint32_t", 864)
        .field("minDropLevel_Weapons", "uint32_t", 868)
        .field("minDropLevel_Offense", "uint32_t", 872)
        .field("minDropLevel_Defense", "uint32_t", 876)
        .field("minDropLevel_Utility", "uint32_t", 880)
        .field("weaponDamage_Scaler", "float", 884);
}

fn register_catalog_manifest(catalog: &mut Catalog) {
    catalog.add_struct("tags", 4).field("tag", "char*", 0);

    catalog
        .add_struct("CatalogEntry", 40)
        .field("assetNameWType", "char*", 0)
        .field("compileTime", "int64_t", 8)
        .field("dataCrc", "uint32_t", 24)
        .field("typeCrc", "uint32_t", 20)
        .field("sourceFileNameWType", "char*", 28)
        .field("version", "uint32_t", 16)
        .array("tags", "tags", 32);

    catalog
        .add_struct("Catalog", 0)
        .array("entries", "CatalogEntry", 0);
}

fn register_levels(catalog: &mut Catalog) {
    catalog.add_struct("LevelAsset", 0).field("unk", "asset", 0);

    catalog
        .add_struct("ChainLevel", 72)
        .field("unk1", "asset", 0)
        .field("unkInt", "uint32_t", 4)
        .field("unk2", "asset", 20)
        .field("unk3", "asset", 36)
        .field("unk4", "asset", 52)
        .field("unk5", "asset", 68);

    catalog
        .add_struct("ChainLevels", 0)
        .array("ChainLevel", "ChainLevel", 0)
        .field("unkFloat", "float", 8);

    catalog.add_struct("PVPLevels", 0).array("levels", "asset", 0);
}
