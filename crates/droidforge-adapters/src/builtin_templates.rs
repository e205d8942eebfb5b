//! Built-in Android project templates.
//!
//! This is the fixed, versioned template set behind the default
//! [`crate::template_store::InMemoryStore`]: one Gradle + Jetpack Compose
//! application skeleton, addressed by the logical ids of
//! `droidforge_core::domain::TemplateMapping::standard()`.
//!
//! Placeholders use the `{{SCREAMING_SNAKE}}` convention of the render
//! context. Files that need no parameterization (launcher assets, ignore
//! rules) are plain literals; the strict renderer passes them through
//! untouched.
//!
//! The Compose compiler version written here is already the pinned one, but
//! the sanitization pass re-pins it on every render anyway - an out-of-band
//! edit of a directory-backed copy of this set must not be able to ship an
//! incompatible version.

use droidforge_core::domain::Template;

/// All built-in templates, one per entry of the standard mapping.
pub fn all() -> Vec<Template> {
    vec![
        Template::new("root/settings.gradle.kts", SETTINGS_GRADLE),
        Template::new("root/build.gradle.kts", ROOT_BUILD_GRADLE),
        Template::new("root/gradle.properties", GRADLE_PROPERTIES),
        Template::new("root/gitignore", GITIGNORE),
        Template::new("app/build.gradle.kts", APP_BUILD_GRADLE),
        Template::new("app/src/main/AndroidManifest.xml", ANDROID_MANIFEST),
        Template::new("app/src/main/java/MainActivity.kt", MAIN_ACTIVITY),
        Template::new("app/src/main/res/values/strings.xml", STRINGS_XML),
        Template::new("app/src/main/res/values/themes.xml", THEMES_XML),
        Template::new("app/src/main/res/values/colors.xml", COLORS_XML),
        Template::new(
            "app/src/main/res/mipmap-anydpi-v26/ic_launcher.xml",
            IC_LAUNCHER,
        ),
        Template::new(
            "app/src/main/res/mipmap-anydpi-v26/ic_launcher_round.xml",
            IC_LAUNCHER_ROUND,
        ),
        Template::new(
            "app/src/main/res/values/ic_launcher_background.xml",
            IC_LAUNCHER_BACKGROUND,
        ),
        Template::new(
            "app/src/main/res/drawable/ic_launcher_foreground.xml",
            IC_LAUNCHER_FOREGROUND,
        ),
    ]
}

const SETTINGS_GRADLE: &str = r#"pluginManagement {
    repositories {
        google()
        mavenCentral()
        gradlePluginPortal()
    }
}
dependencyResolutionManagement {
    repositoriesMode.set(RepositoriesMode.FAIL_ON_PROJECT_REPOS)
    repositories {
        google()
        mavenCentral()
    }
}

rootProject.name = "{{APP_NAME}}"
include(":app")
"#;

const ROOT_BUILD_GRADLE: &str = r#"// Top-level build file: plugin versions shared by all modules.
plugins {
    id("com.android.application") version "8.2.2" apply false
    id("org.jetbrains.kotlin.android") version "1.9.24" apply false
}
"#;

const GRADLE_PROPERTIES: &str = r#"org.gradle.jvmargs=-Xmx2048m -Dfile.encoding=UTF-8
android.useAndroidX=true
android.nonTransitiveRClass=true
kotlin.code.style=official
"#;

const GITIGNORE: &str = r#".gradle
/build
/app/build
local.properties
.idea
*.iml
.DS_Store
/captures
.externalNativeBuild
.cxx
"#;

// Kotlin 1.9.24 pairs with Compose compiler 1.5.14.
const APP_BUILD_GRADLE: &str = r#"plugins {
    id("com.android.application")
    id("org.jetbrains.kotlin.android")
}

android {
    namespace = "{{PACKAGE_NAME}}"
    compileSdk = {{TARGET_SDK}}

    defaultConfig {
        applicationId = "{{PACKAGE_NAME}}"
        minSdk = {{MIN_SDK}}
        targetSdk = {{TARGET_SDK}}
        versionCode = 1
        versionName = "1.0"
    }

    buildTypes {
        release {
            isMinifyEnabled = false
        }
    }

    compileOptions {
        sourceCompatibility = JavaVersion.VERSION_17
        targetCompatibility = JavaVersion.VERSION_17
    }
    kotlinOptions {
        jvmTarget = "17"
    }

    buildFeatures {
        compose = true
    }
    composeOptions {
        kotlinCompilerExtensionVersion = "1.5.14"
    }
}

dependencies {
    implementation(platform("androidx.compose:compose-bom:2024.05.00"))
    implementation("androidx.core:core-ktx:1.13.1")
    implementation("androidx.activity:activity-compose:1.9.0")
    implementation("androidx.compose.ui:ui")
    implementation("androidx.compose.material3:material3")
    implementation("androidx.compose.ui:ui-tooling-preview")
    debugImplementation("androidx.compose.ui:ui-tooling")
}
"#;

const ANDROID_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android">

    <application
        android:allowBackup="true"
        android:icon="@mipmap/ic_launcher"
        android:roundIcon="@mipmap/ic_launcher_round"
        android:label="@string/app_name"
        android:supportsRtl="true"
        android:theme="@style/Theme.Generated">
        <activity
            android:name=".MainActivity"
            android:exported="true"
            android:theme="@style/Theme.Generated">
            <intent-filter>
                <action android:name="android.intent.action.MAIN" />
                <category android:name="android.intent.category.LAUNCHER" />
            </intent-filter>
        </activity>
    </application>

</manifest>
"#;

const MAIN_ACTIVITY: &str = r#"package {{PACKAGE_NAME}}

import android.os.Bundle
import androidx.activity.ComponentActivity
import androidx.activity.compose.setContent
import androidx.compose.foundation.layout.Arrangement
import androidx.compose.foundation.layout.Column
import androidx.compose.foundation.layout.fillMaxSize
import androidx.compose.foundation.layout.padding
import androidx.compose.material3.Button
import androidx.compose.material3.MaterialTheme
import androidx.compose.material3.Surface
import androidx.compose.material3.Text
import androidx.compose.runtime.Composable
import androidx.compose.ui.Modifier
import androidx.compose.ui.unit.dp

class MainActivity : ComponentActivity() {
    override fun onCreate(savedInstanceState: Bundle?) {
        super.onCreate(savedInstanceState)
        setContent {
            MaterialTheme {
                Surface(modifier = Modifier.fillMaxSize()) {
                    GeneratedScreen()
                }
            }
        }
    }
}

@Composable
fun GeneratedScreen() {
    {{COMPOSE_CONTENT}}
}
"#;

const STRINGS_XML: &str = r#"<resources>
    <string name="app_name">{{APP_NAME}}</string>
    <string name="app_description">{{DESCRIPTION}}</string>
</resources>
"#;

const THEMES_XML: &str = r#"<resources>
    <style name="Theme.Generated" parent="android:Theme.Material.Light.NoActionBar" />
</resources>
"#;

const COLORS_XML: &str = r#"<resources>
    <color name="purple_500">#FF6200EE</color>
    <color name="teal_200">#FF03DAC5</color>
    <color name="black">#FF000000</color>
    <color name="white">#FFFFFFFF</color>
</resources>
"#;

const IC_LAUNCHER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/ic_launcher_background" />
    <foreground android:drawable="@drawable/ic_launcher_foreground" />
</adaptive-icon>
"#;

const IC_LAUNCHER_ROUND: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/ic_launcher_background" />
    <foreground android:drawable="@drawable/ic_launcher_foreground" />
</adaptive-icon>
"#;

const IC_LAUNCHER_BACKGROUND: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="ic_launcher_background">#3DDC84</color>
</resources>
"#;

const IC_LAUNCHER_FOREGROUND: &str = r##"<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="108dp"
    android:height="108dp"
    android:viewportWidth="108"
    android:viewportHeight="108">
    <path
        android:fillColor="#FFFFFF"
        android:pathData="M54,30L74,70L34,70Z" />
</vector>
"##;
