use super::AppTheme;

/// Oxide - Warm neutral browns with earthy copper accents (default dark theme)
pub fn oxide() -> AppTheme {
    AppTheme::from_hex(
        "Oxide",
        0x0023_1D1B, // bg_base - Neutral warm brown
        0x001D_1816, // bg_sidebar - Deep oxide brown
        0x002E_2623, // bg_surface - Lighter card surface
        0x003A_312E, // bg_elevated - Input/button background
        0x0046_3B38, // bg_hover - Subtle highlight
        0x0052_4541, // bg_active - Active state brown
        0x00E6_DBD3, // fg_primary - Warm parchment text
        0x00B8_ACA2, // fg_secondary - Muted clay text
        0x007A_6E67, // fg_muted - Darkened earth gray
        0x001D_1816, // fg_on_accent - Dark text on copper
        0x00A7_5533, // accent - Burnt copper orange
        0x00BD_6D4D, // accent_hover - Warm clay highlight
        0x008F_A172, // success - Muted sage green
        0x00D8_A657, // warning - Warm gold
        0x00C2_5D4E, // danger - Terracotta red
        0x007D_AEA3, // info - Muted teal
        0x007D_9BC4, // tag_blue - Dusty steel blue
        0x008F_A172, // tag_green - Sage
        0x00D8_A657, // tag_orange - Warm gold
        0x00AB_8BC4, // tag_purple - Faded violet
        0x00C2_5D4E, // tag_red - Terracotta
        0x007D_AEA3, // tag_teal - Muted teal
        0x003E_3532, // border - Subtle brown border
        0x00A7_5533, // border_strong - Copper accent border
        0x002E_2623, // divider - Surface match
    )
}

/// Oxide Light - Light counterpart to Oxide
/// Warm copper-tinted cream with subtle terracotta influence
pub fn oxide_light() -> AppTheme {
    AppTheme::from_hex(
        "Oxide Light",
        0x00F2_E8D8, // bg_base - Warm cream with subtle copper tint
        0x00E3_D7C5, // bg_sidebar - Warm clay sidebar
        0x00F7_F0E5, // bg_surface - Light warm cream cards
        0x00FC_F8F0, // bg_elevated - Almost white with warmth
        0x00DC_CFBD, // bg_hover - Warm tan hover
        0x00D4_C4B0, // bg_active - Adobe tan active
        0x003A_2E25, // fg_primary - Deep warm brown (almost black)
        0x006A_5D51, // fg_secondary - Medium warm brown
        0x009B_8D7F, // fg_muted - Light brown for disabled
        0x00FF_FCF8, // fg_on_accent - Light cream on copper
        0x00A7_5533, // accent - Burnt copper (same as dark)
        0x0092_4A2E, // accent_hover - Darker copper for contrast
        0x006B_8456, // success - Sage green
        0x00BD_8838, // warning - Warm amber
        0x00AD_4433, // danger - Warm terracotta
        0x004D_8A7E, // info - Teal contrast
        0x004A_6FA5, // tag_blue - Deep steel blue
        0x006B_8456, // tag_green - Sage
        0x00BD_8838, // tag_orange - Amber
        0x008B_5A8E, // tag_purple - Muted purple
        0x00AD_4433, // tag_red - Terracotta
        0x004D_8A7E, // tag_teal - Teal
        0x00D8_CCBA, // border - Warm border
        0x00A7_5533, // border_strong - Copper border
        0x00E3_D7C5, // divider - Warm divider
    )
}

/// Nord - Professional arctic-inspired theme
pub fn nord() -> AppTheme {
    AppTheme::from_hex(
        "Nord",
        0x002E_3440, // bg_base - Polar Night 0
        0x0024_2933, // bg_sidebar - Slightly darker
        0x003B_4252, // bg_surface - Polar Night 1
        0x0043_4C5E, // bg_elevated - Polar Night 2
        0x004C_566A, // bg_hover - Polar Night 3
        0x005E_81AC, // bg_active - Frost 2 (muted)
        0x00EC_EFF4, // fg_primary - Snow Storm 2
        0x00D8_DEE9, // fg_secondary - Snow Storm 1
        0x0061_6E88, // fg_muted - Polar Night 3 lightened
        0x002E_3440, // fg_on_accent - Dark text on light accent
        0x0088_C0D0, // accent - Frost 1 (cyan)
        0x008F_BCBB, // accent_hover - Frost 0
        0x00A3_BE8C, // success - Aurora green
        0x00EB_CB8B, // warning - Aurora yellow
        0x00BF_616A, // danger - Aurora red
        0x0081_A1C1, // info - Frost 2
        0x0081_A1C1, // tag_blue - Frost 2
        0x00A3_BE8C, // tag_green - Aurora green
        0x00D0_8770, // tag_orange - Aurora orange
        0x00B4_8EAD, // tag_purple - Aurora purple
        0x00BF_616A, // tag_red - Aurora red
        0x0088_C0D0, // tag_teal - Frost 1
        0x0043_4C5E, // border - Elevated match
        0x0088_C0D0, // border_strong - Frost accent
        0x003B_4252, // divider - Surface match
    )
}

/// Tokyo Night - Deep indigo night with neon accents
pub fn tokyo_night() -> AppTheme {
    AppTheme::from_hex(
        "Tokyo Night",
        0x001A_1B26, // bg_base - Night
        0x0016_161E, // bg_sidebar - Darker night
        0x0024_283B, // bg_surface - Storm surface
        0x002F_3549, // bg_elevated - Raised slate
        0x003B_4261, // bg_hover - Indigo hover
        0x0041_4868, // bg_active - Active indigo
        0x00C0_CAF5, // fg_primary - Lavender white
        0x00A9_B1D6, // fg_secondary - Cool gray
        0x0056_5F89, // fg_muted - Deep ash
        0x0016_161E, // fg_on_accent - Dark text on neon
        0x007A_A2F7, // accent - Neon blue
        0x0089_B4FA, // accent_hover - Lighter frost
        0x009E_CE6A, // success - Seafoam green
        0x00E0_AF68, // warning - Ember gold
        0x00F7_768E, // danger - Rose red
        0x007D_CFFF, // info - Sky cyan
        0x007A_A2F7, // tag_blue - Neon blue
        0x009E_CE6A, // tag_green - Seafoam
        0x00FF_9E64, // tag_orange - Terracotta orange
        0x00BB_9AF7, // tag_purple - Mauve
        0x00F7_768E, // tag_red - Rose
        0x0073_DACA, // tag_teal - Mint teal
        0x0024_283B, // border - Gutter gray
        0x007A_A2F7, // border_strong - Neon accent
        0x001A_1B26, // divider - Base match
    )
}

/// Gruvbox - Retro warm earthy contrast
pub fn gruvbox() -> AppTheme {
    AppTheme::from_hex(
        "Gruvbox",
        0x0028_2828, // bg_base - Dark0
        0x001D_2021, // bg_sidebar - Dark0 hard
        0x0032_302F, // bg_surface - Dark1
        0x003C_3836, // bg_elevated - Dark2
        0x0050_4945, // bg_hover - Dark3
        0x0066_5C54, // bg_active - Dark4
        0x00EB_DBB2, // fg_primary - Light1
        0x00D5_C4A1, // fg_secondary - Light2
        0x0092_8374, // fg_muted - Gray
        0x0028_2828, // fg_on_accent - Dark text on yellow
        0x00D7_9921, // accent - Neutral yellow
        0x00FA_BD2F, // accent_hover - Bright yellow
        0x00B8_BB26, // success - Bright green
        0x00FA_BD2F, // warning - Bright yellow
        0x00FB_4934, // danger - Bright red
        0x0083_A598, // info - Bright blue
        0x0083_A598, // tag_blue - Blue
        0x00B8_BB26, // tag_green - Green
        0x00FE_8019, // tag_orange - Orange
        0x00D3_869B, // tag_purple - Purple
        0x00FB_4934, // tag_red - Red
        0x008E_C07C, // tag_teal - Aqua
        0x003C_3836, // border - Dark2
        0x00D7_9921, // border_strong - Yellow accent
        0x0032_302F, // divider - Surface match
    )
}
